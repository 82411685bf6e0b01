pub mod naver;
pub mod press;

pub use naver::{FetchFailure, FetchOutcome, NaverClient, NewsSource, RawItem};
pub use press::{NO_SOURCE, PressDirectory};
