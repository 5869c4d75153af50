//! Wire model of the upstream movie database.

mod types;

pub use types::{
    decode_reply, total_pages, Envelope, MovieDetail, ProviderReply, SearchPage,
    SearchResultItem, NO_POSTER, PAGE_SIZE,
};
