pub mod search;


pub use search::{parse_price_text, parse_search_page};
