athyg_schema! {
    /// One star from an ATHYG v3 file (34 columns).
    ///
    /// Same attributes as [`V2`](super::V2) plus the color index `ci` at
    /// position 22; every column from `mag_src` onwards sits one position
    /// later than in V2.
    pub struct V3: V3[34] {
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
        /// B-V color index.
        22 => ci: f64,
        23 => mag_src: String,
        24 => rv: f64,
        25 => rv_src: String,
        26 => pm_ra: f64,
        27 => pm_dec: f64,
        28 => pm_src: f64,
        29 => vx: f64,
        30 => vy: f64,
        31 => vz: f64,
        32 => spect: f64,
        33 => spect_src: String,
    }
}
