pub mod fetch;
pub mod session;
pub mod shared;

pub use chromiumoxide::page::Page;
pub use fetch::BrowserFetcher;
pub use session::Session;
pub use shared::WaitConfig;
