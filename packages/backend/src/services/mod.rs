pub mod export;
pub mod qa;
pub mod quiz_bank;
pub mod recommendation;
pub mod reference;
pub mod resource_kind;
pub mod session;
