pub struct Config {
    /// Suppresses the banner printed before every command.
    pub no_banner: bool,

    /// Output reduction level.
    ///
    /// `1` hides headers and the banner, `2` prints results only.
    pub quiet: u8,

    /// Emits results as JSON instead of aligned text.
    pub json: bool,

    /// Recomputes batches on the calling thread instead of the rayon pool.
    ///
    /// Output order is identical either way.
    pub sequential: bool,
}
