athyg_schema! {
    /// One star from an ATHYG v1 file (23 columns).
    ///
    /// Identifier columns are cross-references into other catalogs and are
    /// `None` when the star has no entry there. Text columns are always
    /// `Some`, holding an empty string when the column was blank.
    pub struct V1: V1[23] {
        /// ATHYG row identifier.
        0 => id: u64,
        /// Tycho-2 identifier, e.g. `"5949-2777-1"`.
        1 => tyc: String,
        /// Gaia DR3 `source_id`.
        2 => gaia: u64,
        /// HYG v3 identifier.
        3 => hyg: u64,
        /// Hipparcos catalog number.
        4 => hip: u64,
        /// Henry Draper catalog number.
        5 => hd: u64,
        /// Harvard Revised (Yale Bright Star) number.
        6 => hr: u64,
        /// Gliese catalog designation.
        7 => gl: String,
        /// Bayer letter.
        8 => bayer: String,
        /// Flamsteed number, kept as written.
        9 => flam: String,
        /// Three-letter constellation abbreviation.
        10 => con: String,
        /// Common name, e.g. `"Sirius"`.
        11 => proper: String,
        /// Right ascension, J2000.
        12 => ra: f64,
        /// Declination, J2000.
        13 => dec: f64,
        /// Source of the position.
        14 => pos_src: String,
        /// Distance in parsecs.
        15 => dist: f64,
        /// Cartesian position, parsecs.
        16 => x0: f64,
        17 => y0: f64,
        18 => z0: f64,
        /// Source of the distance.
        19 => dist_src: String,
        /// Apparent visual magnitude.
        20 => mag: f64,
        /// Absolute visual magnitude.
        21 => absmag: f64,
        /// Source of the magnitude.
        22 => mag_src: String,
    }
}
