athyg_schema! {
    /// One star from an ATHYG v2 file (33 columns).
    ///
    /// The first 23 columns are laid out exactly as in [`V1`](super::V1).
    pub struct V2: V2[33] {
        0 => id: u64,
        1 => tyc: String,
        2 => gaia: u64,
        3 => hyg: u64,
        4 => hip: u64,
        5 => hd: u64,
        6 => hr: u64,
        7 => gl: String,
        8 => bayer: String,
        9 => flam: String,
        10 => con: String,
        11 => proper: String,
        12 => ra: f64,
        13 => dec: f64,
        14 => pos_src: String,
        15 => dist: f64,
        16 => x0: f64,
        17 => y0: f64,
        18 => z0: f64,
        19 => dist_src: String,
        20 => mag: f64,
        21 => absmag: f64,
        22 => mag_src: String,
        /// Radial velocity, km/s.
        23 => rv: f64,
        24 => rv_src: String,
        /// Proper motion in right ascension, mas/yr.
        25 => pm_ra: f64,
        /// Proper motion in declination, mas/yr.
        26 => pm_dec: f64,
        /// Proper-motion source. Numeric in the published layout, so source
        /// tags such as `H` read as `None`.
        27 => pm_src: f64,
        /// Cartesian space velocity.
        28 => vx: f64,
        29 => vy: f64,
        30 => vz: f64,
        /// Spectral type. Numeric in the published layout; class strings
        /// such as `A1V` read as `None`.
        31 => spect: f64,
        32 => spect_src: String,
    }
}
