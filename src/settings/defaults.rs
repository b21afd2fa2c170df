//! Built-in values for the Outlook Planner add-in build.

pub const PROJECT_NAME: &str = "Outlook Planner Add-in";

pub const HOST_RUNTIME_NAME: &str = "Node.js";

pub const MIN_HOST_MAJOR: u64 = 16;

pub const REQUIRED_FILES: &[&str] = &[
    "package.json",
    "webpack.config.js",
    "manifest.xml",
    "src/taskpane/taskpane.js",
    "src/taskpane/taskpane.html",
];

pub const PLACEHOLDERS: &[&str] = &[
    "12345678-1234-1234-1234-123456789012",
    "localhost:3000",
    "Your Company",
];

pub const EXPECTED_OUTPUTS: &[&str] = &[
    "dist/taskpane.html",
    "dist/taskpane.js",
    "dist/commands.html",
    "dist/commands.js",
    "dist/manifest.xml",
];

pub const MANIFEST_PATH: &str = "manifest.xml";

pub const DEPENDENCY_STORE: &str = "node_modules";

pub const RECORD_PATH: &str = "dist/build-info.json";

pub const INSTALL_COMMAND: &[&str] = &["npm", "install"];

pub const BUILD_COMMAND: &[&str] = &["npm", "run", "build"];

pub const VERSION_COMMAND: &[&str] = &["node", "--version"];

pub const NEXT_STEPS: &[&str] = &[
    "Test the add-in: npm run dev-server",
    "Deploy files from dist/ folder to your web server",
    "Update manifest.xml URLs to point to your server",
    "Install via Microsoft 365 Admin Center or sideload for testing",
];

pub const README_HINT: &str = "See README.md for detailed deployment instructions";

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
