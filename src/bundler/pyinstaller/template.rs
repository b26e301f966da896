//! PyInstaller spec template.
//!
//! Every interpolated value is pre-rendered as a Python literal by
//! [`super::script`], so the template never quotes anything itself.

/// One-file, windowed executable with explicit data files and hidden imports.
pub const SPEC_TEMPLATE: &str = r#"# -*- mode: python ; coding: utf-8 -*-
# Generated by pyship; changes are overwritten by the next build.

a = Analysis(
    [{{entry_point}}],
    pathex=[],
    binaries=[],
    datas=[{{#each datas}}
        ({{source}}, {{target}}),{{/each}}
    ],
    hiddenimports=[{{#each hidden_imports}}
        {{this}},{{/each}}
    ],
    hookspath=[{{#each hooks_path}}{{this}}, {{/each}}],
    hooksconfig={},
    runtime_hooks=[],
    excludes=[{{#each excludes}}
        {{this}},{{/each}}
    ],
    noarchive=False,
)
pyz = PYZ(a.pure)

exe = EXE(
    pyz,
    a.scripts,
    a.binaries,
    a.datas,
    [],
    name={{name}},
    debug=False,
    bootloader_ignore_signals=False,
    strip=False,
    upx={{upx}},
    upx_exclude=[],
    runtime_tmpdir=None,
    console={{console}},
    disable_windowed_traceback=False,
    argv_emulation=False,
    target_arch=None,
    codesign_identity=None,
    entitlements_file=None,
    icon={{icon}},
)
"#;
