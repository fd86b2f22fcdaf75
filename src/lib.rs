//! TN Universe lookup bot.
//!
//! One slash command, one linear pipeline: classify the typed SKU, build
//! the catalog URL, fetch the product page, extract the attribute fields,
//! reply with a card. No state survives an invocation.

pub mod bot;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod formatter;
pub mod pipeline;
pub mod sku;
