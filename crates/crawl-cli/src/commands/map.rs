use std::path::Path;

use crawl_map::{Layout, RenderConfig, render};

pub fn run(path: &Path, json: bool, config: &RenderConfig) -> Result<(), String> {
    let loaded = super::load(path)?;
    let layout = Layout::infer(&loaded.map, loaded.root);

    if json {
        let text = serde_json::to_string_pretty(&layout)
            .map_err(|e| format!("failed to serialize layout: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let here = loaded.player.map(|(room, _)| room);
    let drawing = render(&loaded.map, &layout, config, here);
    if drawing.is_empty() {
        println!("  Nothing to draw.");
    } else {
        println!("{drawing}");
    }

    Ok(())
}
