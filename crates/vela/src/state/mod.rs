use crate::store::DynUserStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DynUserStore,
}
