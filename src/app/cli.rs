//! cli stuff
use {
    crate::{config::options::PostsRs, ui::Route},
    clap::Parser,
    color_eyre::{Report, eyre::Result},
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
    },
};

/// the CLI
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Cli {
    /// Use a different API base url for this run
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Open a single post instead of the post list
    #[arg(short, long)]
    pub post: Option<i64>,

    /// Render the first screen once without prompting, then exit
    #[arg(long)]
    pub print: bool,

    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,
}

impl Cli {
    /// run the generators that were asked for
    ///
    /// returns whether anything was generated, in which case the app should exit
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    pub fn run_generators(&self) -> Result<bool> {
        if self.gen_schema {
            Self::gen_schema(self.save)?;
        }

        if self.gen_default {
            Self::gen_defaults(self.save)?;
        }

        Ok(self.gen_schema || self.gen_default)
    }

    /// the screen to start on
    pub fn start_route(&self) -> Route {
        match self.post {
            Some(id) => Route::Post { id },
            None => Route::Posts,
        }
    }

    /// save a string to a file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open `path`
    pub fn write_to_file(path: &str, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes()).map_err(Report::new)
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `postrs.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let schema_str = Self::schema_json()?;

        if save {
            Self::write_to_file("postrs.schema.json", &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// the config schema as pretty json
    pub fn schema_json() -> Result<String> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<PostsRs>();

        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `postrs.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&PostsRs::default())?;

        if save {
            Self::write_to_file("postrs.default.toml", &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }
}
