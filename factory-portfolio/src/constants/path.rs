/// Built-in project catalogue, loaded through the JSON asset plugin.
pub const PORTFOLIO_MANIFEST_PATH: &str = "portfolio/manifest.json";
