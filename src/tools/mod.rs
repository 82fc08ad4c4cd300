//! Outbound actions on activities: map links and clipboard copies

pub mod clipboard;
pub mod maps;

pub use clipboard::{
    ClipboardBackend, Clipboard, CommandClipboard, CommandFileCopy, StagedCopyBackend,
};
pub use maps::{
    amap_url, apple_maps_url, baidu_maps_url, google_maps_url, MapLink, MapProvider,
};
