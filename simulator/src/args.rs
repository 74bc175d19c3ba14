//! Command line options.

use clap::Parser;

/// Clockish desktop simulator: WWVB symbol ring on a 240x240 round face.
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Sample a synthetic receiver through the symbol binner instead of replaying the
    /// recorded minutes (~1 s per tick, the window is unresponsive while sampling)
    #[arg(long)]
    pub live: bool,

    /// Window pixel scale
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["simulator"]).unwrap();
        assert_eq!(options, Options { live: false, scale: 2 });
    }

    #[test]
    fn test_live_and_scale() {
        let options = Options::try_parse_from(["simulator", "--scale", "3", "--live"]).unwrap();
        assert!(options.live);
        assert_eq!(options.scale, 3);
    }

    #[test]
    fn test_bad_scale_is_rejected() {
        assert!(Options::try_parse_from(["simulator", "--scale", "big"]).is_err());
        assert!(Options::try_parse_from(["simulator", "--scale"]).is_err());
        assert!(Options::try_parse_from(["simulator", "--scale", "0"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Options::try_parse_from(["simulator", "--bogus"]).is_err());
    }
}
