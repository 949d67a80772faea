//! Диалог приёмки сырья

use contracts::domain::a002_inventory_item::intake::field;
use contracts::domain::a002_inventory_item::{InventoryIntake, InventoryIntakeForm, MAX_INTAKE_QUANTITY};
use contracts::shared::validation::ValidationErrors;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface,
    DialogTitle, Input, InputType,
};

use crate::app::use_config;
use crate::shared::date_utils::today_local;

/// Подпись, поле и сообщение об ошибке под ним
#[component]
fn FormField(
    label: &'static str,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label">{label}</label>
            {children()}
            {move || error.get().map(|message| view! {
                <span class="form-field__error">{message}</span>
            })}
        </div>
    }
}

#[component]
pub fn IntakeDialog(open: RwSignal<bool>, on_accept: Callback<InventoryIntake>) -> impl IntoView {
    let latency_ms = use_config().inventory.intake_latency_ms;

    let item_name = RwSignal::new(String::new());
    let batch_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    // ошибки показываются только после первой попытки сохранить
    let attempted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let form = move || InventoryIntakeForm {
        item_name: item_name.get(),
        batch_id: batch_id.get(),
        quantity: quantity.get(),
        supplier: supplier.get(),
        expiry_date: expiry_date.get(),
    };

    let errors: Memo<ValidationErrors> = Memo::new(move |_| {
        if !attempted.get() {
            return ValidationErrors::default();
        }
        form().validate(today_local()).err().unwrap_or_default()
    });
    let error_of = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name)));

    let reset = move || {
        for value in [item_name, batch_id, quantity, supplier, expiry_date] {
            value.set(String::new());
        }
        attempted.set(false);
    };

    let on_cancel = move |_| {
        reset();
        open.set(false);
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        attempted.set(true);
        match untrack(form).validate(today_local()) {
            Ok(intake) => {
                submitting.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(latency_ms).await;
                    on_accept.run(intake);
                    submitting.set(false);
                    reset();
                    open.set(false);
                });
            }
            Err(e) => log::debug!("Intake rejected: {}", e),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"New Stock Intake"</DialogTitle>
                    <DialogContent>
                        <div class="intake-form">
                            <FormField label="Item Name" error=error_of(field::ITEM_NAME)>
                                <Input value=item_name placeholder="e.g. Organic Butter" />
                            </FormField>
                            <FormField label="Batch ID" error=error_of(field::BATCH_ID)>
                                <Input value=batch_id placeholder="BATCH-1024" />
                            </FormField>
                            <FormField label="Quantity" error=error_of(field::QUANTITY)>
                                <Input
                                    value=quantity
                                    input_type=InputType::Number
                                    placeholder=format!("1 - {}", MAX_INTAKE_QUANTITY)
                                />
                            </FormField>
                            <FormField label="Supplier" error=error_of(field::SUPPLIER)>
                                <Input value=supplier placeholder="e.g. Dairy Farms" />
                            </FormField>
                            <FormField label="Expiry Date" error=error_of(field::EXPIRY_DATE)>
                                <input
                                    type="date"
                                    class="form-field__date"
                                    prop:value=move || expiry_date.get()
                                    on:input=move |ev| expiry_date.set(event_target_value(&ev))
                                />
                            </FormField>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {move || if submitting.get() { "Saving..." } else { "Confirm Intake" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=on_cancel
                            disabled=Signal::derive(move || submitting.get())
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
