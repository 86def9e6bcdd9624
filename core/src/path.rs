use std::path::Component;
use std::path::Path;

use crate::config::Icons;

/// Second path components that mark a home directory (`/home/<user>`,
/// `/Users/<user>`).
const HOME_MARKERS: &[&str] = &["home", "Users"];

/// Formats a working directory for the cwd segment.
///
/// The root (or `/home/<user>`) prefix is replaced by an icon and the
/// remaining directories are slash-joined directly after it. When more than
/// `max_depth` directories remain, only the last `max_depth` are kept behind
/// the truncation glyph and the icon is dropped. A `max_depth` of zero keeps
/// only the glyph; configuration files cannot set it.
pub fn format_cwd(cwd: &str, icons: &Icons, max_depth: usize) -> String {
    if cwd.is_empty() {
        return icons.root_base.clone();
    }

    let parts = path_parts(Path::new(cwd));
    if parts.is_empty() {
        return icons.root_base.clone();
    }

    let (icon, tail): (&str, &[String]) =
        if parts.len() > 1 && HOME_MARKERS.contains(&parts[1].as_str()) {
            // Drops the root, the marker and the username beneath it.
            (&icons.home, parts.get(3..).unwrap_or_default())
        } else if parts.len() > 1 {
            (&icons.root_descended, &parts[1..])
        } else {
            (&icons.root_base, &[])
        };

    if tail.len() > max_depth {
        let kept = &tail[tail.len() - max_depth..];
        return format!("{}{}", icons.truncate, kept.join("/"));
    }

    format!("{icon}{}", tail.join("/"))
}

/// Path components as strings, with the root (or drive prefix) as its own
/// leading component.
fn path_parts(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => {
                if parts.is_empty() {
                    parts.push(std::path::MAIN_SEPARATOR.to_string());
                }
            }
            Component::Normal(os) => parts.push(os.to_string_lossy().into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::CurDir => {}
        }
    }
    parts
}
