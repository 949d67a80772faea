/// Утилиты для списков: поле поиска и индикаторы сортировки
use contracts::shared::grid::SortState;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Задержка перед применением поискового запроса
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Id таймера debounce, не больше одного одновременно
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct PendingTimeout(Option<i32>);

impl PendingTimeout {
    /// Запомнить новый таймер, вернуть тот, который он заменяет
    fn replace(&mut self, id: i32) -> Option<i32> {
        self.0.replace(id)
    }

    fn take(&mut self) -> Option<i32> {
        self.0.take()
    }
}

fn cancel_timeout(pending: StoredValue<PendingTimeout>) {
    let mut taken = None;
    pending.update_value(|p| taken = p.take());
    let Some(timeout_id) = taken else {
        return;
    };
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(timeout_id);
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для подсветки активного поиска)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(PendingTimeout::default());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        // Отменяем предыдущий таймер если есть
        cancel_timeout(debounce_timeout);

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                debounce_timeout.update_value(|p| {
                    p.replace(timeout_id);
                });
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        // иначе отложенный ввод вернёт очищенный текст
        cancel_timeout(debounce_timeout);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(state: SortState) -> &'static str {
    match state {
        SortState::Ascending => " ▲",
        SortState::Descending => " ▼",
        SortState::Unsorted => " ⇅",
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn sort_class(state: SortState) -> &'static str {
    match state {
        SortState::Unsorted => "table__sort-indicator",
        _ => "table__sort-indicator table__sort-indicator--active",
    }
}
