// Basic usage example for cfgstore
//
// Run with: cargo run --example basic_usage

use cfgstore::{ConfigStore, SettingEntry, schema};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schema! {
        "theme" => SettingEntry::choice("auto", ["light", "dark", "auto"])
            .description("UI theme preference"),
        "max_items" => SettingEntry::int(50),
        "enable_notifications" => SettingEntry::boolean(true),
        "api_endpoint" => SettingEntry::string("https://api.example.com"),
    };

    let path = std::env::temp_dir().join("cfgstore-example").join("config.json");
    let mut store = ConfigStore::new(&schema);

    println!("📦 cfgstore Basic Usage Example\n");

    // A missing file keeps the schema defaults
    store.load(&path)?;
    println!("✅ theme: {}", store.get("theme")?);

    println!("🔧 Changing theme to 'dark'...");
    store.set("theme", "dark")?;

    println!("🔧 Changing theme to 'purple'...");
    if let Err(e) = store.set("theme", "purple") {
        println!("❌ Rejected: {e}");
    }

    store.save(&path)?;
    println!("\n💾 Saved to {}", path.display());
    println!("{}", std::fs::read_to_string(&path)?);

    let mut reloaded = ConfigStore::new(&schema);
    reloaded.load(&path)?;
    println!("✅ Reloaded theme: {}", reloaded.get("theme")?);

    Ok(())
}
