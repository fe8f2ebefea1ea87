pub mod static_feed;
pub mod youtube_feed;

pub use static_feed::StaticFeedSource;
pub use youtube_feed::YoutubeFeedSource;
