//! Clark-notation tag and attribute constants for the bound element set.

macro_rules! w {
    ($local:literal) => {
        concat!(
            "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}",
            $local
        )
    };
}

macro_rules! r {
    ($local:literal) => {
        concat!(
            "{http://schemas.openxmlformats.org/officeDocument/2006/relationships}",
            $local
        )
    };
}

macro_rules! wp {
    ($local:literal) => {
        concat!(
            "{http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing}",
            $local
        )
    };
}

// Document structure.
pub(crate) const W_BODY: &str = w!("body");
pub(crate) const W_P: &str = w!("p");
pub(crate) const W_TBL: &str = w!("tbl");

// Paragraph content.
pub(crate) const W_R: &str = w!("r");
pub(crate) const W_HYPERLINK: &str = w!("hyperlink");
pub(crate) const W_INS: &str = w!("ins");
pub(crate) const W_DEL: &str = w!("del");
pub(crate) const W_BOOKMARK_START: &str = w!("bookmarkStart");
pub(crate) const W_BOOKMARK_END: &str = w!("bookmarkEnd");

// Run inner content.
pub(crate) const W_T: &str = w!("t");
pub(crate) const W_BR: &str = w!("br");
pub(crate) const W_TAB: &str = w!("tab");
pub(crate) const W_CR: &str = w!("cr");
pub(crate) const W_NO_BREAK_HYPHEN: &str = w!("noBreakHyphen");
pub(crate) const W_DEL_TEXT: &str = w!("delText");
pub(crate) const W_DRAWING: &str = w!("drawing");

// Run properties.
pub(crate) const W_RPR: &str = w!("rPr");
pub(crate) const W_B: &str = w!("b");
pub(crate) const W_I: &str = w!("i");
pub(crate) const W_CAPS: &str = w!("caps");
pub(crate) const W_SMALL_CAPS: &str = w!("smallCaps");
pub(crate) const W_STRIKE: &str = w!("strike");
pub(crate) const W_DSTRIKE: &str = w!("dstrike");
pub(crate) const W_VANISH: &str = w!("vanish");
pub(crate) const W_SZ: &str = w!("sz");
pub(crate) const W_SZ_CS: &str = w!("szCs");
pub(crate) const W_COLOR: &str = w!("color");
pub(crate) const W_U: &str = w!("u");
pub(crate) const W_HIGHLIGHT: &str = w!("highlight");
pub(crate) const W_VERT_ALIGN: &str = w!("vertAlign");
pub(crate) const W_R_FONTS: &str = w!("rFonts");
pub(crate) const W_R_STYLE: &str = w!("rStyle");
pub(crate) const W_SPACING: &str = w!("spacing");
pub(crate) const W_BDR: &str = w!("bdr");
pub(crate) const W_SPACE: &str = w!("space");

// Paragraph properties.
pub(crate) const W_PPR: &str = w!("pPr");
pub(crate) const W_JC: &str = w!("jc");
pub(crate) const W_P_STYLE: &str = w!("pStyle");
pub(crate) const W_NUM_PR: &str = w!("numPr");
pub(crate) const W_ILVL: &str = w!("ilvl");
pub(crate) const W_NUM_ID: &str = w!("numId");
pub(crate) const W_NUM_FMT: &str = w!("numFmt");
pub(crate) const W_IND: &str = w!("ind");
pub(crate) const W_KEEP_NEXT: &str = w!("keepNext");
pub(crate) const W_KEEP_LINES: &str = w!("keepLines");
pub(crate) const W_PAGE_BREAK_BEFORE: &str = w!("pageBreakBefore");
pub(crate) const W_WIDOW_CONTROL: &str = w!("widowControl");
pub(crate) const W_TABS: &str = w!("tabs");

// Section properties.
pub(crate) const W_SECT_PR: &str = w!("sectPr");
pub(crate) const W_PG_SZ: &str = w!("pgSz");
pub(crate) const W_PG_MAR: &str = w!("pgMar");
pub(crate) const W_TYPE: &str = w!("type");

// Tables.
pub(crate) const W_TBL_PR: &str = w!("tblPr");
pub(crate) const W_TBL_STYLE: &str = w!("tblStyle");
pub(crate) const W_TBL_W: &str = w!("tblW");
pub(crate) const W_TBL_GRID: &str = w!("tblGrid");
pub(crate) const W_GRID_COL: &str = w!("gridCol");
pub(crate) const W_TR: &str = w!("tr");
pub(crate) const W_TR_PR: &str = w!("trPr");
pub(crate) const W_TR_HEIGHT: &str = w!("trHeight");
pub(crate) const W_TC: &str = w!("tc");
pub(crate) const W_TC_PR: &str = w!("tcPr");
pub(crate) const W_TC_W: &str = w!("tcW");
pub(crate) const W_GRID_SPAN: &str = w!("gridSpan");
pub(crate) const W_V_MERGE: &str = w!("vMerge");

// Attributes in the `w` namespace.
pub(crate) const W_VAL: &str = w!("val");
pub(crate) const W_ASCII: &str = w!("ascii");
pub(crate) const W_H_ANSI: &str = w!("hAnsi");
pub(crate) const W_EAST_ASIA: &str = w!("eastAsia");
pub(crate) const W_CS: &str = w!("cs");
pub(crate) const W_THEME_COLOR: &str = w!("themeColor");
pub(crate) const W_LEFT: &str = w!("left");
pub(crate) const W_RIGHT: &str = w!("right");
pub(crate) const W_START: &str = w!("start");
pub(crate) const W_END: &str = w!("end");
pub(crate) const W_FIRST_LINE: &str = w!("firstLine");
pub(crate) const W_HANGING: &str = w!("hanging");
pub(crate) const W_BEFORE: &str = w!("before");
pub(crate) const W_AFTER: &str = w!("after");
pub(crate) const W_LINE: &str = w!("line");
pub(crate) const W_LINE_RULE: &str = w!("lineRule");
pub(crate) const W_ID: &str = w!("id");
pub(crate) const W_AUTHOR: &str = w!("author");
pub(crate) const W_DATE: &str = w!("date");
pub(crate) const W_NAME: &str = w!("name");
pub(crate) const W_POS: &str = w!("pos");
pub(crate) const W_LEADER: &str = w!("leader");
pub(crate) const W_W: &str = w!("w");
pub(crate) const W_H: &str = w!("h");
pub(crate) const W_ORIENT: &str = w!("orient");
pub(crate) const W_TOP: &str = w!("top");
pub(crate) const W_BOTTOM: &str = w!("bottom");
pub(crate) const W_HEADER: &str = w!("header");
pub(crate) const W_FOOTER: &str = w!("footer");
pub(crate) const W_GUTTER: &str = w!("gutter");
pub(crate) const W_H_RULE: &str = w!("hRule");
pub(crate) const W_CLEAR: &str = w!("clear");
pub(crate) const W_ANCHOR_ATTR: &str = w!("anchor");
pub(crate) const W_HISTORY: &str = w!("history");

// Relationship attributes.
pub(crate) const R_ID: &str = r!("id");

// WordprocessingDrawing.
pub(crate) const WP_INLINE: &str = wp!("inline");
pub(crate) const WP_ANCHOR: &str = wp!("anchor");
pub(crate) const WP_EXTENT: &str = wp!("extent");
pub(crate) const WP_DOC_PR: &str = wp!("docPr");

// XML core attributes.
pub(crate) const XML_SPACE: &str = "{http://www.w3.org/XML/1998/namespace}space";
