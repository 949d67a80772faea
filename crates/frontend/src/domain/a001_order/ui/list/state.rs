use contracts::domain::a001_order::OrderField;
use contracts::shared::grid::GridState;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub grid: GridState<OrderField>,
    pub is_loaded: bool,
}

impl OrdersListState {
    pub fn new(page_size: i64) -> Self {
        Self {
            grid: GridState::new(page_size),
            is_loaded: false,
        }
    }
}

pub fn create_state(page_size: i64) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::new(page_size))
}
