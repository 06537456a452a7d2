use common::model::config::FieldKey;

#[derive(Clone, Debug)]
pub enum Msg {
    SetEntity(String),
    SetTitle(String),
    SetProvider(String),
    SetBillIndex(String),
    ToggleField(FieldKey, bool),
}
