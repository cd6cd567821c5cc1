mod avatar;
mod faq_accordion;
mod progress_bar;
mod session_card;
mod site_footer;
mod site_header;
mod stats_card;
mod video_tile;

pub use avatar::Avatar;
pub use faq_accordion::FaqAccordion;
pub use progress_bar::ProgressBar;
pub use session_card::SessionCard;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use stats_card::StatsCard;
pub use video_tile::VideoTile;
