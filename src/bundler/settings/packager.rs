//! PyInstaller invocation and spec options.

use std::path::PathBuf;

/// Packaging tool configuration.
///
/// `hidden_imports` must track every module the GUI and modeling stack load
/// dynamically; PyInstaller's analysis cannot see them and omits them
/// silently. The post-build audit reports the ones PyInstaller could not
/// resolve.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagerSettings {
    /// Python interpreter to run PyInstaller with.
    ///
    /// Default: first of `python3`, `python`, `py` found on PATH
    pub python: Option<PathBuf>,

    /// Full command prefix replacing `<python> -m PyInstaller`.
    ///
    /// The spec path and the standard flags are appended to it.
    pub command: Option<Vec<String>>,

    /// Run `pip install pyinstaller` when the module is missing.
    pub install_if_missing: bool,

    /// Modules PyInstaller must bundle even though it cannot discover them.
    pub hidden_imports: Vec<String>,

    /// Modules kept out of the bundle.
    ///
    /// Default: the Qt bindings other than PyQt6, which conflict at runtime
    pub excludes: Vec<String>,

    /// Extra hook directories.
    pub hooks_path: Vec<String>,

    /// Build a console executable instead of a windowed one.
    pub console: bool,

    /// Compress the executable with UPX when available.
    pub upx: bool,

    /// Optional icon file.
    pub icon: Option<PathBuf>,
}

impl Default for PackagerSettings {
    fn default() -> Self {
        Self {
            python: None,
            command: None,
            install_if_missing: true,
            hidden_imports: default_hidden_imports(),
            excludes: [
                "PyQt5",
                "PySide2",
                "PySide6",
                "PyQt5.QtCore",
                "PyQt5.QtGui",
                "PyQt5.QtWidgets",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            hooks_path: vec![".".into()],
            console: false,
            upx: true,
            icon: None,
        }
    }
}

fn default_hidden_imports() -> Vec<String> {
    [
        // HTTP stack used by the AI client
        "requests",
        "urllib3",
        "certifi",
        "ssl",
        "urllib3.util.ssl_",
        "urllib3.contrib.pyopenssl",
        "urllib3.packages.ssl_match_hostname",
        "urllib3.util.retry",
        "urllib3.connectionpool",
        "urllib3.connection",
        "urllib3.response",
        "urllib3.fields",
        "urllib3.filepost",
        "urllib3.poolmanager",
        "urllib3.request",
        "urllib3.util",
        "urllib3.util.connection",
        "urllib3.util.request",
        "urllib3.util.response",
        "urllib3.util.timeout",
        "urllib3.util.url",
        // scipy submodules loaded lazily (fftpack in particular)
        "scipy",
        "scipy.fft",
        "scipy.fftpack",
        "scipy.spatial",
        "scipy.spatial.distance",
        "scipy.interpolate",
        "scipy.integrate",
        "scipy.linalg",
        "scipy.special",
        "scipy.ndimage",
        "numpy",
        "sklearn",
        "pandas",
        // matplotlib backends are selected at runtime
        "matplotlib",
        "matplotlib.backends.backend_tkagg",
        "matplotlib.backends.backend_qt5agg",
        "matplotlib.backends.backend_qt4agg",
        "matplotlib.backends.backend_agg",
        "matplotlib.figure",
        "matplotlib.pyplot",
        "matplotlib.patches",
        "matplotlib.path",
        "matplotlib.cbook",
        "matplotlib.colors",
        "matplotlib.collections",
        "matplotlib.text",
        "matplotlib.font_manager",
        "matplotlib.transforms",
        "matplotlib.lines",
        "matplotlib.image",
        "matplotlib.dates",
        "matplotlib.units",
        "matplotlib.container",
        "pyvista",
        "gempy",
        "gempy_viewer",
        "torch",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
