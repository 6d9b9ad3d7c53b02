use clap::ValueEnum;
use supports_color::Stream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
