pub mod app;
pub mod content_modal;
pub mod expander;
pub mod fade;
pub mod nav;
pub mod news_card;
pub mod news_section;
pub mod stats_section;
pub mod work_card;
pub mod works_section;
