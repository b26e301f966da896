//! Built-in document templates.

pub const INSTALLATION_TEMPLATE: &str = r#"{{title}} INSTALLATION INSTRUCTIONS
================================

IMPORTANT: this application needs Python and several packages installed on
your system.

Prerequisites:
--------------
1. Windows 10 or later (64-bit)
2. Administrator rights on your computer (to install Python and packages)

Step 1: Install Python
----------------------
1. Go to https://www.python.org/downloads/
2. Download Python 3.10, 3.11 or 3.12 (64-bit)
3. Run the installer
4. IMPORTANT: tick "Add Python to PATH" during installation
5. Click "Install Now"
6. If Windows SmartScreen warns you, click "More info" and then "Run anyway"

Step 2: Install dependencies
----------------------------
1. Extract {{archive_name}} into a new folder, for example {{app_name}} on drive C:
2. Hold Shift and right-click an empty area inside the folder
3. Choose "Open PowerShell window here" or "Open command window here"
4. Run:

   pip install -r requirements.txt

5. Wait for all packages to install (this can take several minutes)
   Note: if pip fails, try: python -m pip install -r requirements.txt

Step 3: Run the application
---------------------------
1. Double-click {{executable}} to start the application
2. If Windows shows a security warning, click "More info" and then "Run anyway"

Troubleshooting:
----------------
Q: "python is not recognized as an internal or external command"
A: Python is not on PATH. Reinstall Python and tick "Add Python to PATH".

Q: Permission errors during installation
A: Run PowerShell as administrator.

Q: The application does not start or shows import errors
A: Make sure every dependency installed correctly, then reinstall them with:
   pip install -r requirements.txt

Q: "No module named PyQt6"
A: Run: pip install PyQt6

Q: Network or SSL errors during installation
A: Some corporate networks block package downloads. Try:
   pip install --trusted-host pypi.org --trusted-host pypi.python.org --trusted-host files.pythonhosted.org -r requirements.txt

Updating:
---------
1. Download the new distribution package
2. Replace the old {{executable}} with the new one
3. Update dependencies: pip install -r requirements.txt --upgrade

The {{data_dir}} folder must stay next to {{executable}}.
"#;

pub const QUICK_START_TEMPLATE: &str = r#"{{product_name}} Quick Start Guide

1. Download and install Python 3.10 or higher from https://python.org

2. Install required packages by running the following command in a command prompt:
   pip install -r requirements.txt

3. Run the application by double-clicking {{executable}}

4. Keep the {{data_dir}} folder next to {{executable}}; it holds the input templates.

5. If you encounter any problems, check INSTALLATION_INSTRUCTIONS.txt for troubleshooting.
"#;
