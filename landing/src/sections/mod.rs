// Landing page sections
// Developed by the Trap Handle team (c)2025

mod carousel;
mod design;
mod featured;
mod footer;
mod hero;
mod link_button;
mod looping_video;
mod nav;
mod reviews;

pub use carousel::ColorCarousel;
pub use design::Design;
pub use featured::Featured;
pub use footer::Footer;
pub use hero::Hero;
pub use link_button::{ButtonVariant, ExternalButton, LinkButton};
pub use looping_video::LoopingVideo;
pub use nav::Nav;
pub use reviews::Reviews;
