pub mod back_to_top;
pub mod carousel;
pub mod counters;
pub mod faq;
pub mod lazy_image;
pub mod links;
pub mod modal;
pub mod navbar;
pub mod newsletter;
pub mod payment_form;
pub mod pricing;
pub mod reveal;
pub mod toast;
pub mod video;
