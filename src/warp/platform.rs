//! Target platforms understood by warp-packer.

use crate::error::{Result, WarpError};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Target platform for the packed executable.
///
/// Each supported platform maps to exactly one warp-packer `--arch` token.
/// [`WarpPlatform::Unsupported`] only arises from parsing or deserializing an
/// unrecognized value and is rejected when the packer is run.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_warp::WarpPlatform;
///
/// let platform: WarpPlatform = "linux-x64".parse().unwrap();
/// assert_eq!(platform, WarpPlatform::LinuxX64);
/// assert_eq!(platform.vendor_token().unwrap(), "linux-x64");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WarpPlatform {
    /// 64-bit Linux
    #[default]
    LinuxX64,
    /// 64-bit macOS
    MacOsX64,
    /// 64-bit Windows
    WindowsX64,
    /// Any value outside the supported set, kept verbatim
    Unsupported(String),
}

impl WarpPlatform {
    /// All supported platforms.
    pub const SUPPORTED: [WarpPlatform; 3] = [
        WarpPlatform::LinuxX64,
        WarpPlatform::MacOsX64,
        WarpPlatform::WindowsX64,
    ];

    /// The `--arch` token warp-packer expects for this platform.
    pub fn vendor_token(&self) -> Result<&'static str> {
        match self {
            Self::LinuxX64 => Ok("linux-x64"),
            Self::MacOsX64 => Ok("macos-x64"),
            Self::WindowsX64 => Ok("windows-x64"),
            Self::Unsupported(value) => Err(WarpError::UnsupportedPlatform {
                value: value.clone(),
            }),
        }
    }

    /// The platform of the running host, when it is a supported one.
    pub fn host() -> Option<Self> {
        if !cfg!(target_arch = "x86_64") {
            return None;
        }

        if cfg!(target_os = "linux") {
            Some(Self::LinuxX64)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOsX64)
        } else if cfg!(target_os = "windows") {
            Some(Self::WindowsX64)
        } else {
            None
        }
    }

    /// Returns true for every variant except [`WarpPlatform::Unsupported`].
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl FromStr for WarpPlatform {
    type Err = Infallible;

    /// Accepts vendor tokens and variant names, ignoring case, `-` and `_`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Ok(match normalized.as_str() {
            "linuxx64" => Self::LinuxX64,
            "macosx64" | "osxx64" => Self::MacOsX64,
            "windowsx64" | "winx64" => Self::WindowsX64,
            _ => Self::Unsupported(s.to_string()),
        })
    }
}

impl From<String> for WarpPlatform {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(platform) => platform,
            Err(never) => match never {},
        }
    }
}

impl From<WarpPlatform> for String {
    fn from(platform: WarpPlatform) -> Self {
        platform.to_string()
    }
}

impl fmt::Display for WarpPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(value) => f.write_str(value),
            supported => f.write_str(supported.vendor_token().map_err(|_| fmt::Error)?),
        }
    }
}
