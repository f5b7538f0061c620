//! Formatting utilities for file sizes, dates, and file types.

use chrono::{DateTime, Utc};

use crate::model::FileOrDir;

const SIZE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Binary-prefix size with two decimals (e.g., "4.00 KiB").
pub fn bytes_to_human_readable(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exp = ((63 - bytes.leading_zeros()) / 10).min(SIZE_UNITS.len() as u32 - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{:.2} {}", value, SIZE_UNITS[exp as usize])
}

/// Size column text. Directories report their entry count.
pub fn size_label(entry: &FileOrDir) -> String {
    if entry.is_dir() {
        format!("{} items", entry.size)
    } else {
        bytes_to_human_readable(entry.size)
    }
}

/// Relative age of an RFC 3339 timestamp ("Just now", "3 hours ago"),
/// falling back to `M/D/YYYY` beyond a week. Unparseable input is returned
/// unchanged.
pub fn relative_time(modified: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(modified) else {
        return modified.to_string();
    };
    let then = then.with_timezone(&Utc);
    let diff = now.signed_duration_since(then);

    let ago = |n: i64, unit: &str| {
        if n > 1 {
            format!("{} {}s ago", n, unit)
        } else {
            format!("1 {} ago", unit)
        }
    };

    if diff.num_minutes() < 1 {
        "Just now".to_string()
    } else if diff.num_hours() < 1 {
        ago(diff.num_minutes(), "minute")
    } else if diff.num_days() < 1 {
        ago(diff.num_hours(), "hour")
    } else if diff.num_weeks() < 1 {
        ago(diff.num_days(), "day")
    } else {
        then.format("%-m/%-d/%Y").to_string()
    }
}

/// Human-readable type from a file name's extension.
pub fn readable_filetype(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or_default();

    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "JPEG Image",
        "png" => "PNG Image",
        "gif" => "GIF Image",
        "webp" => "WebP Image",
        "mp4" => "MP4 Video",
        "webm" => "WebM Video",
        "mkv" => "Matroska Video",
        "mov" => "MOV Video",
        "mpg" | "mpeg" => "MPEG Video",
        "pdf" => "PDF Document",
        "doc" | "docx" => "Word Document",
        "xls" | "xlsx" => "Excel Document",
        "ppt" | "pptx" => "PowerPoint Document",
        "txt" => "Text Document",
        "md" => "Markdown Document",
        "zip" => "ZIP Archive",
        "rar" => "RAR Archive",
        "7z" => "7z Archive",
        "tar" => "TAR Archive",
        "mp3" => "MP3 Audio",
        "flac" => "FLAC Audio",
        "wav" => "WAV Audio",
        "m4a" => "M4A Audio",
        _ => "File",
    }
}

/// Type column text.
pub fn type_label(entry: &FileOrDir) -> &'static str {
    if entry.is_dir() {
        "Folder"
    } else {
        readable_filetype(&entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn test_bytes_to_human_readable() {
        assert_eq!(bytes_to_human_readable(0), "0 B");
        assert_eq!(bytes_to_human_readable(1), "1.00 B");
        assert_eq!(bytes_to_human_readable(1023), "1023.00 B");
        assert_eq!(bytes_to_human_readable(1024), "1.00 KiB");
        assert_eq!(bytes_to_human_readable(4096), "4.00 KiB");
        assert_eq!(bytes_to_human_readable(1536), "1.50 KiB");
        assert_eq!(bytes_to_human_readable(5 * 1024 * 1024), "5.00 MiB");
        assert_eq!(bytes_to_human_readable(1 << 40), "1.00 TiB");
        assert_eq!(bytes_to_human_readable(1 << 50), "1024.00 TiB");
    }

    #[test]
    fn test_size_and_type_labels() {
        let file = FileOrDir {
            name: "file3.txt".to_string(),
            kind: EntryKind::File,
            size: 4096,
            modified: String::new(),
            contents: None,
        };
        assert_eq!(size_label(&file), "4.00 KiB");
        assert_eq!(type_label(&file), "Text Document");

        let dir = FileOrDir {
            name: "photos.jpg".to_string(),
            kind: EntryKind::Dir,
            size: 3,
            ..file
        };
        assert_eq!(size_label(&dir), "3 items");
        assert_eq!(type_label(&dir), "Folder");
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(relative_time(&ago(Duration::seconds(30)), now()), "Just now");
        assert_eq!(relative_time(&ago(Duration::seconds(-30)), now()), "Just now");
        assert_eq!(relative_time(&ago(Duration::seconds(90)), now()), "1 minute ago");
        assert_eq!(relative_time(&ago(Duration::minutes(5)), now()), "5 minutes ago");
        assert_eq!(relative_time(&ago(Duration::minutes(60)), now()), "1 hour ago");
        assert_eq!(relative_time(&ago(Duration::hours(23)), now()), "23 hours ago");
        assert_eq!(relative_time(&ago(Duration::hours(25)), now()), "1 day ago");
        assert_eq!(relative_time(&ago(Duration::days(6)), now()), "6 days ago");
        assert_eq!(relative_time(&ago(Duration::days(7)), now()), "6/8/2024");
    }

    #[test]
    fn test_relative_time_passes_through_garbage() {
        assert_eq!(relative_time("yesterday-ish", now()), "yesterday-ish");
        assert_eq!(relative_time("", now()), "");
    }

    #[test]
    fn test_readable_filetype() {
        assert_eq!(readable_filetype("photo.JPG"), "JPEG Image");
        assert_eq!(readable_filetype("archive.tar.gz"), "File");
        assert_eq!(readable_filetype("backup.7z"), "7z Archive");
        assert_eq!(readable_filetype("slides.pptx"), "PowerPoint Document");
        assert_eq!(readable_filetype("Makefile"), "File");
        assert_eq!(readable_filetype("README.md"), "Markdown Document");
    }
}
