use std::fs::File;

use formwidget::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("render_list.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let options = CheckboxListOptions::from_json(
        r#"{
            "choices": {
                "fruit": {"a": "Apple", "b": "Banana"},
                "veg": {"c": "Carrot"}
            },
            "template": "<fieldset><legend>%group%</legend>%options%</fieldset>",
            "theme": "safari"
        }"#,
    )?;
    let widget = CheckboxList::new(options);

    let html = widget.render(
        "food",
        &SelectedValue::from(vec!["b", "c"]),
        &Attributes::new(),
        &[],
    )?;
    println!("{html}");

    for (path, media) in widget.stylesheets() {
        println!("stylesheet: {path} ({media})");
    }
    for (path, _) in widget.javascripts() {
        println!("script: {path}");
    }

    Ok(())
}
