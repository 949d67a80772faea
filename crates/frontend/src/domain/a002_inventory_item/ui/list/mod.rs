mod intake_dialog;

use contracts::domain::a002_inventory_item::{receive, seed_items, InventoryIntake, InventoryItem};
use contracts::shared::number_format::format_thousands;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use intake_dialog::IntakeDialog;

#[component]
fn InventoryCard(item: InventoryItem) -> impl IntoView {
    let InventoryItem { name, batch, quantity, supplier, status, .. } = item;
    let quantity = format!("{} units", format_thousands(quantity as u64));

    view! {
        <div class="inventory-card">
            <div class="inventory-card__header">
                <div class="inventory-card__icon">{icon("package")}</div>
                <Badge variant=status.badge_color()>{status.label()}</Badge>
            </div>
            <div class="inventory-card__name">{name}</div>
            <div class="inventory-card__batch">{batch}</div>
            <div class="inventory-card__footer">
                <div class="inventory-card__metric">
                    <span class="inventory-card__metric-label">"Quantity"</span>
                    <span class="inventory-card__metric-value">{quantity}</span>
                </div>
                <div class="inventory-card__metric">
                    <span class="inventory-card__metric-label">"Supplier"</span>
                    <span class="inventory-card__metric-value">{supplier}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let items: RwSignal<Vec<InventoryItem>> = RwSignal::new(seed_items());
    let dialog_open = RwSignal::new(false);

    let on_accept = Callback::new(move |intake: InventoryIntake| {
        items.update(|list| {
            receive(list, &intake);
        });
    });

    view! {
        <PageFrame page_id="a002_inventory_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Raw Materials"</h1>
                    <Badge variant="primary">{move || items.with(|l| l.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog_open.set(true)
                    >
                        {icon("plus")}
                        " Add Stock Intake"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="inventory-grid">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| view! { <InventoryCard item=item /> }
                    />
                </div>
            </div>

            <IntakeDialog open=dialog_open on_accept=on_accept />
        </PageFrame>
    }
}
