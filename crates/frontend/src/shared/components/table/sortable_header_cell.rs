//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Total"
//!     sort_state=Signal::derive(move || state.with(|s| s.grid.sort_state_of(OrderField::Total)))
//!     on_sort=Callback::new(move |_| toggle_sort(OrderField::Total))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{sort_class, sort_indicator};
use contracts::shared::grid::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Состояние сортировки этой колонки
    #[prop(into)]
    sort_state: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || sort_class(sort_state.get())>
                    {move || sort_indicator(sort_state.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
