//! Table views: `w:tbl`, grid, rows, and cells.

use oxml_tree::XmlElement;
use wml_types::{
    parse_decimal, parse_twips, HeightRule, TableWidthType, Twips, VerticalMerge,
};

use crate::body::{block_content, BlockContent};
use crate::support::{child_val, required_attr};
use crate::tags;
use crate::{ElementView, WmlError};

/// `<w:tbl>`: a table.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for Table<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> Table<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        Table { el }
    }

    /// View an element as a table, checking its tag.
    pub fn from_element(el: &'a XmlElement) -> Result<Self, WmlError> {
        if el.tag() != tags::W_TBL {
            return Err(WmlError::UnexpectedElement {
                expected: "w:tbl",
                found: el.tag().to_string(),
            });
        }
        Ok(Table { el })
    }

    /// The `w:tblPr` child, if present.
    pub fn properties(&self) -> Option<TableProperties<'a>> {
        self.el.find_first(tags::W_TBL_PR).map(TableProperties::new)
    }

    /// The `w:tblGrid` child, if present.
    pub fn grid(&self) -> Option<TableGrid<'a>> {
        self.el.find_first(tags::W_TBL_GRID).map(TableGrid::new)
    }

    /// Rows in document order.
    pub fn rows(&self) -> Vec<TableRow<'a>> {
        self.el
            .find_all(&[tags::W_TR])
            .into_iter()
            .map(TableRow::new)
            .collect()
    }
}

/// A decoded `CT_TblWidth` value: how wide, and in which unit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidth {
    /// Interpretation of `value`: twips for `dxa`, fiftieths of a percent
    /// for `pct`, ignored for `auto`/`nil`.
    pub width_type: TableWidthType,
    /// Raw magnitude, absent for `auto`-sized widths.
    pub value: Option<i64>,
}

fn table_width(el: &XmlElement) -> Result<TableWidth, WmlError> {
    // The schema default for an absent w:type is dxa.
    let width_type = match el.attr(tags::W_TYPE) {
        None => TableWidthType::Dxa,
        Some(raw) => TableWidthType::from_token(raw)?,
    };
    let value = match el.attr(tags::W_W) {
        None => None,
        Some(raw) => Some(parse_decimal(raw)?),
    };
    Ok(TableWidth { width_type, value })
}

/// `<w:tblPr>`: table properties.
#[derive(Debug, Clone, Copy)]
pub struct TableProperties<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for TableProperties<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> TableProperties<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        TableProperties { el }
    }

    /// `w:tblStyle`: referenced table style id.
    pub fn style(&self) -> Result<Option<&'a str>, WmlError> {
        child_val(self.el, tags::W_TBL_STYLE)
    }

    /// `w:tblW`: preferred table width.
    pub fn width(&self) -> Result<Option<TableWidth>, WmlError> {
        match self.el.find_first(tags::W_TBL_W) {
            None => Ok(None),
            Some(el) => table_width(el).map(Some),
        }
    }
}

/// `<w:tblGrid>`: the table's column grid.
#[derive(Debug, Clone, Copy)]
pub struct TableGrid<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for TableGrid<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> TableGrid<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        TableGrid { el }
    }

    /// Grid columns in document order.
    pub fn columns(&self) -> Vec<GridColumn<'a>> {
        self.el
            .find_all(&[tags::W_GRID_COL])
            .into_iter()
            .map(GridColumn::new)
            .collect()
    }
}

/// `<w:gridCol>`: one column of the table grid.
#[derive(Debug, Clone, Copy)]
pub struct GridColumn<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for GridColumn<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> GridColumn<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        GridColumn { el }
    }

    /// `w:w`: column width.
    pub fn width(&self) -> Result<Option<Twips>, WmlError> {
        match self.el.attr(tags::W_W) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_twips(raw)?)),
        }
    }
}

/// A decoded `w:trHeight` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeight {
    /// The height value.
    pub value: Twips,
    /// How the value is applied. The schema default for an absent
    /// `w:hRule` is `auto`.
    pub rule: HeightRule,
}

/// `<w:tr>`: a table row.
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for TableRow<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> TableRow<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        TableRow { el }
    }

    /// Cells in document order.
    pub fn cells(&self) -> Vec<TableCell<'a>> {
        self.el
            .find_all(&[tags::W_TC])
            .into_iter()
            .map(TableCell::new)
            .collect()
    }

    /// `w:trPr/w:trHeight`: declared row height, if any.
    pub fn height(&self) -> Result<Option<RowHeight>, WmlError> {
        let height = self
            .el
            .find_first(tags::W_TR_PR)
            .and_then(|pr| pr.find_first(tags::W_TR_HEIGHT));
        match height {
            None => Ok(None),
            Some(el) => {
                let value = parse_twips(required_attr(el, tags::W_VAL)?)?;
                let rule = match el.attr(tags::W_H_RULE) {
                    None => HeightRule::Auto,
                    Some(raw) => HeightRule::from_token(raw)?,
                };
                Ok(Some(RowHeight { value, rule }))
            }
        }
    }
}

/// `<w:tc>`: a table cell.
#[derive(Debug, Clone, Copy)]
pub struct TableCell<'a> {
    el: &'a XmlElement,
}

impl<'a> ElementView<'a> for TableCell<'a> {
    fn element(&self) -> &'a XmlElement {
        self.el
    }
}

impl<'a> TableCell<'a> {
    pub(crate) fn new(el: &'a XmlElement) -> Self {
        TableCell { el }
    }

    /// Block-level content of the cell, in document order.
    pub fn content(&self) -> Vec<BlockContent<'a>> {
        block_content(self.el)
    }

    /// `w:tcPr/w:tcW`: preferred cell width.
    pub fn width(&self) -> Result<Option<TableWidth>, WmlError> {
        let tc_w = self
            .el
            .find_first(tags::W_TC_PR)
            .and_then(|pr| pr.find_first(tags::W_TC_W));
        match tc_w {
            None => Ok(None),
            Some(el) => table_width(el).map(Some),
        }
    }

    /// `w:tcPr/w:gridSpan`: grid columns spanned. The schema default is 1.
    pub fn grid_span(&self) -> Result<i64, WmlError> {
        let span = self
            .el
            .find_first(tags::W_TC_PR)
            .and_then(|pr| pr.find_first(tags::W_GRID_SPAN));
        match span {
            None => Ok(1),
            Some(el) => Ok(parse_decimal(required_attr(el, tags::W_VAL)?)?),
        }
    }

    /// `w:tcPr/w:vMerge`: vertical merge state. An element present
    /// without `w:val` means `continue` (schema default); an absent
    /// element means the cell is not merged.
    pub fn vertical_merge(&self) -> Result<Option<VerticalMerge>, WmlError> {
        let merge = self
            .el
            .find_first(tags::W_TC_PR)
            .and_then(|pr| pr.find_first(tags::W_V_MERGE));
        match merge {
            None => Ok(None),
            Some(el) => match el.attr(tags::W_VAL) {
                None => Ok(Some(VerticalMerge::Continue)),
                Some(raw) => Ok(Some(VerticalMerge::from_token(raw)?)),
            },
        }
    }

    /// Concatenated paragraph text of the cell.
    pub fn text(&self) -> String {
        self.content()
            .iter()
            .filter_map(|block| match block {
                BlockContent::Paragraph(p) => Some(p.text()),
                BlockContent::Table(_) => None,
            })
            .collect()
    }
}
