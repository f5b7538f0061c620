//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use fsbrowse_core::FileOrDir;
use fsbrowse_core::format::readable_filetype;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuArrowDown as SortDesc, LuArrowUp as SortAsc,
        LuChevronRight as ChevronRight, LuFile as File, LuFileText as FileText,
        LuFilm as FileVideo, LuFolder as Folder, LuHouse as Home, LuImage as FileImage,
        LuLogOut as Logout, LuMusic as FileAudio, LuSearch as Search,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as SortDesc, BsArrowUp as SortAsc, BsBoxArrowRight as Logout,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkZip as FileArchive, BsFolderFill as Folder,
        BsHouseFill as Home, BsSearch as Search,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(SEARCH, Search);
themed_icon!(LOGOUT, Logout);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);

/// Icon for a listing entry, chosen from its readable type.
pub fn for_entry(entry: &FileOrDir) -> Icon {
    if entry.is_dir() {
        return FOLDER;
    }

    let kind = readable_filetype(&entry.name);
    if kind.ends_with("Image") {
        FILE_IMAGE
    } else if kind.ends_with("Video") {
        FILE_VIDEO
    } else if kind.ends_with("Audio") {
        FILE_AUDIO
    } else if kind.ends_with("Archive") {
        FILE_ARCHIVE
    } else if kind.ends_with("Document") {
        FILE_TEXT
    } else {
        FILE
    }
}
