use pt_core::config::{DotOptions, SampleOptions};
use pt_core::error::CoreError;
use pt_core::grid::DotSet;

use crate::braille::{BLANK, CELL_HEIGHT, CELL_WIDTH, DOT_OFFSETS, braille_char};
use crate::sample;

/// Affichage à matrice de points, rendu en motifs Braille.
///
/// Owns the logical dimensions, the sparse dot set, and the rendered glyph
/// panel. Dimensions are fixed at construction, rounded up to whole 2×4
/// cells; the effective `width`/`height` are therefore always multiples of
/// 2 and 4 and at least the requested values.
///
/// Public y coordinates are bottom-up (y = 0 is the bottom row). Dots are
/// stored vertically flipped (`stored_y = height - y - 1`); the panel and
/// the glyph encoder operate on stored, top-down coordinates only. `dots`
/// and `panel` stay private so the two cannot drift apart outside of an
/// explicitly requested `skip_rebuild` window.
///
/// # Example
/// ```
/// use pt_braille::DotMatrixDisplay;
/// let mut display = DotMatrixDisplay::new(4, 4).unwrap();
/// display.enable_dot(0, 0);
/// assert_eq!(display.render(), "\u{2840}\u{2800}");
/// ```
#[derive(Clone)]
pub struct DotMatrixDisplay {
    /// Effective width in dots, multiple of `CELL_WIDTH`.
    width: u32,
    /// Effective height in dots, multiple of `CELL_HEIGHT`.
    height: u32,
    /// Panel width in glyphs.
    panel_width: u32,
    /// Panel height in glyphs.
    panel_height: u32,
    /// Dot state, stored (top-down) coordinates.
    dots: DotSet,
    /// Rendered glyphs, row-major, `panel_height` × `panel_width`.
    panel: Vec<char>,
}

impl DotMatrixDisplay {
    /// Crée un display aux dimensions demandées, arrondies au bloc 2×4.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Example
    /// ```
    /// use pt_braille::DotMatrixDisplay;
    /// let display = DotMatrixDisplay::new(5, 5).unwrap();
    /// assert_eq!((display.width(), display.height()), (6, 8));
    /// assert_eq!((display.panel_width(), display.panel_height()), (3, 2));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let panel_width = width.div_ceil(CELL_WIDTH);
        let panel_height = height.div_ceil(CELL_HEIGHT);
        Ok(Self {
            width: panel_width * CELL_WIDTH,
            height: panel_height * CELL_HEIGHT,
            panel_width,
            panel_height,
            dots: DotSet::new(),
            panel: vec![BLANK; (panel_width * panel_height) as usize],
        })
    }

    /// Effective width in dots.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Effective height in dots.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Panel width in glyphs.
    #[must_use]
    pub fn panel_width(&self) -> u32 {
        self.panel_width
    }

    /// Panel height in glyphs.
    #[must_use]
    pub fn panel_height(&self) -> u32 {
        self.panel_height
    }

    /// Whether the dot at (x, y) is lit, in public (bottom-up) coordinates.
    ///
    /// Out-of-range coordinates read as off.
    #[must_use]
    pub fn dot(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.dots.contains(x, self.height - y - 1)
    }

    /// Number of lit dots.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Allume ou éteint un point. Coordonnées publiques, y vers le haut.
    ///
    /// Unless `opts.skip_rebuild`, recomputes exactly the one affected
    /// glyph — O(1) regardless of grid size. Out-of-range coordinates are
    /// ignored: nothing changes and `false` is returned.
    ///
    /// # Example
    /// ```
    /// use pt_braille::DotMatrixDisplay;
    /// use pt_core::config::DotOptions;
    /// let mut display = DotMatrixDisplay::new(8, 8).unwrap();
    /// assert!(display.set_dot(2, 1, DotOptions::default()));
    /// assert!(!display.set_dot(8, 1, DotOptions::default()));
    /// ```
    pub fn set_dot(&mut self, x: u32, y: u32, opts: DotOptions) -> bool {
        if x >= self.width || y >= self.height {
            log::trace!("point hors limites ignoré : ({x}, {y})");
            return false;
        }
        let stored_y = self.height - y - 1;
        if opts.enable {
            self.dots.insert(x, stored_y);
        } else {
            self.dots.remove(x, stored_y);
        }
        if !opts.skip_rebuild {
            self.refresh_cell(x / CELL_WIDTH, stored_y / CELL_HEIGHT);
        }
        true
    }

    /// Allume un point.
    pub fn enable_dot(&mut self, x: u32, y: u32) -> bool {
        self.set_dot(x, y, DotOptions::default())
    }

    /// Éteint un point.
    pub fn disable_dot(&mut self, x: u32, y: u32) -> bool {
        self.set_dot(
            x,
            y,
            DotOptions {
                enable: false,
                ..DotOptions::default()
            },
        )
    }

    /// Applique un lot de points sans réinitialiser l'existant.
    ///
    /// Each dot skips its own incremental refresh; one full rebuild runs at
    /// the end instead, unless `opts.skip_rebuild`. Returns the number of
    /// in-range dots applied.
    pub fn add_dots(&mut self, dots: &DotSet, opts: DotOptions) -> usize {
        let each = DotOptions {
            enable: opts.enable,
            skip_rebuild: true,
        };
        let mut applied = 0;
        for (x, y) in dots.iter() {
            if self.set_dot(x, y, each) {
                applied += 1;
            }
        }
        if !opts.skip_rebuild {
            self.rebuild_panel();
        }
        applied
    }

    /// Remplace tous les points par le lot donné (reset puis `add_dots`).
    ///
    /// With `opts.enable == false` this degenerates to an empty display:
    /// the reset clears everything and the batch then removes absent dots.
    /// Returns the number of in-range dots applied.
    pub fn set_dots(&mut self, dots: &DotSet, opts: DotOptions) -> usize {
        self.reset_panel();
        self.add_dots(dots, opts)
    }

    /// Allume tous les points, puis reconstruit le panneau entier.
    pub fn enable_all_dots(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                self.dots.insert(x, y);
            }
        }
        self.rebuild_panel();
    }

    /// Échantillonne `y = round(f(x))` sur la largeur du display.
    ///
    /// Pure: returns a dot map in public (bottom-up) coordinates without
    /// touching the display. See [`sample::sample_curve`] for the fill
    /// policy and range rules.
    #[must_use]
    pub fn dots_by_callback<F>(&self, f: F, opts: SampleOptions) -> DotSet
    where
        F: Fn(u32) -> f64,
    {
        sample::sample_curve(self.width, self.height, f, opts)
    }

    /// Échantillonne une courbe puis remplace tous les points par le résultat.
    ///
    /// Returns the number of in-range dots applied.
    pub fn set_dots_by_callback<F>(
        &mut self,
        f: F,
        sample_opts: SampleOptions,
        dot_opts: DotOptions,
    ) -> usize
    where
        F: Fn(u32) -> f64,
    {
        let dots = self.dots_by_callback(f, sample_opts);
        self.set_dots(&dots, dot_opts)
    }

    /// Éteint tous les points et remet le panneau à blanc (U+2800).
    pub fn reset_panel(&mut self) {
        self.dots.clear();
        self.panel.fill(BLANK);
    }

    /// Reconstruit chaque glyphe du panneau depuis l'état des points.
    ///
    /// O(`panel_width` × `panel_height`) appels à l'encodeur.
    pub fn rebuild_panel(&mut self) {
        for cell_y in 0..self.panel_height {
            for cell_x in 0..self.panel_width {
                let idx = (cell_y * self.panel_width + cell_x) as usize;
                self.panel[idx] = braille_char(self.cell_mask(cell_x, cell_y));
            }
        }
    }

    /// Glyphe encodant le bloc 2×4 de la cellule (`cell_x`, `cell_y`).
    ///
    /// Panel (glyph-grid) coordinates, computed from the current dot state.
    /// Out-of-range cells read as blank.
    ///
    /// # Example
    /// ```
    /// use pt_braille::DotMatrixDisplay;
    /// let mut display = DotMatrixDisplay::new(2, 4).unwrap();
    /// display.enable_dot(1, 0);
    /// assert_eq!(display.glyph(0, 0), '\u{2880}');
    /// ```
    #[must_use]
    pub fn glyph(&self, cell_x: u32, cell_y: u32) -> char {
        if cell_x >= self.panel_width || cell_y >= self.panel_height {
            return BLANK;
        }
        braille_char(self.cell_mask(cell_x, cell_y))
    }

    /// Concatène le panneau : lignes de haut en bas, jointes par `\n`.
    ///
    /// No trailing newline, no padding beyond the rounded-up grid. Pure.
    ///
    /// # Example
    /// ```
    /// use pt_braille::DotMatrixDisplay;
    /// let display = DotMatrixDisplay::new(4, 8).unwrap();
    /// assert_eq!(display.render(), "\u{2800}\u{2800}\n\u{2800}\u{2800}");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        // Braille glyphs are 3 bytes each in UTF-8.
        let mut out = String::with_capacity(
            (self.panel_width as usize * 3 + 1) * self.panel_height as usize,
        );
        for row in 0..self.panel_height as usize {
            if row > 0 {
                out.push('\n');
            }
            let start = row * self.panel_width as usize;
            for &glyph in &self.panel[start..start + self.panel_width as usize] {
                out.push(glyph);
            }
        }
        out
    }

    /// Bitmask of the 2×4 dot block at panel cell (`cell_x`, `cell_y`).
    fn cell_mask(&self, cell_x: u32, cell_y: u32) -> u8 {
        let base_x = cell_x * CELL_WIDTH;
        let base_y = cell_y * CELL_HEIGHT;
        let mut mask = 0u8;
        for (bit, &(dx, dy)) in DOT_OFFSETS.iter().enumerate() {
            if self.dots.contains(base_x + dx, base_y + dy) {
                mask |= 1 << bit;
            }
        }
        mask
    }

    /// Recompute the single panel cell (`cell_x`, `cell_y`).
    fn refresh_cell(&mut self, cell_x: u32, cell_y: u32) {
        let idx = (cell_y * self.panel_width + cell_x) as usize;
        self.panel[idx] = braille_char(self.cell_mask(cell_x, cell_y));
    }
}
