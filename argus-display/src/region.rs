//! Bordered window regions
//!
//! A region is a rectangle on the character surface, border included;
//! a 2x2 region is all border. Placement is checked before any drawing
//! happens, and each way a region can fail to render gets its own
//! status.

/// Ways a region can fail to render on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// The region's origin lies outside the surface
    OffSurface,
    /// The region extends past the surface edge
    DoesNotFit,
    /// The region is smaller than its own border
    TooSmall,
}

/// A rectangular window on the character surface, border included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// Leftmost column, 0-indexed
    pub col: u8,
    /// Topmost row, 0-indexed
    pub row: u8,
    /// Width in characters, borders included
    pub width: u8,
    /// Height in rows, borders included
    pub height: u8,
}

impl Region {
    /// Create a region at the given origin and size
    pub const fn new(col: u8, row: u8, width: u8, height: u8) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// Check that this region renders safely on a surface
    ///
    /// The origin check runs first: with unsigned coordinates an origin
    /// beyond the surface would otherwise always read as a fit failure.
    pub fn validate(&self, surface_cols: u8, surface_rows: u8) -> Result<(), LayoutError> {
        if self.col >= surface_cols || self.row >= surface_rows {
            return Err(LayoutError::OffSurface);
        }
        if self.col as u16 + self.width as u16 > surface_cols as u16
            || self.row as u16 + self.height as u16 > surface_rows as u16
        {
            return Err(LayoutError::DoesNotFit);
        }
        if self.width < 2 || self.height < 2 {
            return Err(LayoutError::TooSmall);
        }
        Ok(())
    }

    /// Rightmost column of the region
    pub const fn right(&self) -> u8 {
        self.col + self.width - 1
    }

    /// Bottom row of the region
    pub const fn bottom(&self) -> u8 {
        self.row + self.height - 1
    }
}
