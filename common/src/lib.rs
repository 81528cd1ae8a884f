//! MixShelf Common Library
//!
//! Web(WASM)クライアントから利用される型と同期ロジック。
//! ブラウザAPIに依存しないため、ネイティブの `cargo test` で検証できる

pub mod error;
pub mod inventory;
pub mod parser;
pub mod spirits;
pub mod types;

pub use error::{Error, Result};
pub use inventory::InventoryView;
pub use parser::{
    parse_drinks_response, parse_inventory_response, parse_labels_response, parse_recipe_response,
};
pub use spirits::{filter_known_spirits, is_known_spirit, KNOWN_SPIRITS};
pub use types::{
    AddItemRequest, DrinkDetail, DrinkSummary, InventoryResponse, LabelsResponse,
};
