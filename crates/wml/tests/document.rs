//! End-to-end walks over a realistic `document.xml` part.

use wml::types::{HalfPoints, Justification, Twips};
use wml::{
    BlockContent, Document, DrawingContent, ParagraphContent, RunContent, RunContentHost, WmlError,
};

const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document
    xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
    xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
    xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing">
  <w:body>
    <w:p>
      <w:pPr>
        <w:pStyle w:val="Heading1"/>
        <w:jc w:val="center"/>
      </w:pPr>
      <w:r>
        <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
        <w:t>Quarterly Report</w:t>
      </w:r>
    </w:p>
    <w:p>
      <w:r><w:t xml:space="preserve">See </w:t></w:r>
      <w:hyperlink r:id="rId5" w:history="1">
        <w:r><w:t>the appendix</w:t></w:r>
      </w:hyperlink>
      <w:r><w:t xml:space="preserve"> for details.</w:t></w:r>
    </w:p>
    <w:tbl>
      <w:tblPr><w:tblW w:w="5000" w:type="pct"/></w:tblPr>
      <w:tblGrid><w:gridCol w:w="4675"/><w:gridCol w:w="4675"/></w:tblGrid>
      <w:tr>
        <w:tc><w:p><w:r><w:t>North</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>42</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
    <w:p>
      <w:r>
        <w:drawing>
          <wp:inline>
            <wp:extent cx="914400" cy="457200"/>
            <wp:docPr id="7" name="Chart 7"/>
          </wp:inline>
        </w:drawing>
      </w:r>
    </w:p>
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440"
               w:header="720" w:footer="720" w:gutter="0"/>
    </w:sectPr>
  </w:body>
</w:document>"#;

#[test]
fn walks_the_whole_story() {
    let doc = Document::from_xml(DOCUMENT).expect("document parses");
    let body = doc.body().expect("body present");

    let blocks = body.content();
    assert_eq!(blocks.len(), 4);
    assert!(matches!(blocks[2], BlockContent::Table(_)));

    let paragraphs = body.paragraphs();
    assert_eq!(paragraphs.len(), 3);

    let heading = &paragraphs[0];
    let props = heading.properties().expect("pPr");
    assert_eq!(props.style().unwrap(), Some("Heading1"));
    assert_eq!(props.alignment().unwrap(), Some(Justification::Center));
    let run_props = heading.runs()[0].properties().expect("rPr");
    assert_eq!(run_props.bold().unwrap(), Some(true));
    assert_eq!(run_props.size().unwrap(), Some(HalfPoints(32)));
    assert_eq!(run_props.size().unwrap().unwrap().points(), 16.0);
}

#[test]
fn hyperlink_text_joins_the_paragraph() {
    let doc = Document::from_xml(DOCUMENT).expect("document parses");
    let paragraphs = doc.paragraphs().expect("paragraphs");
    let linked = &paragraphs[1];
    assert_eq!(linked.text(), "See the appendix for details.");
    match &linked.content()[1] {
        ParagraphContent::Hyperlink(link) => {
            assert_eq!(link.rel_id(), Some("rId5"));
            assert_eq!(link.history().unwrap(), Some(true));
        }
        other => panic!("expected hyperlink, got {other:?}"),
    }
}

#[test]
fn table_and_section_decode() {
    let doc = Document::from_xml(DOCUMENT).expect("document parses");
    let body = doc.body().expect("body");

    let table = &body.tables()[0];
    let width = table.properties().unwrap().width().unwrap().unwrap();
    assert_eq!(width.width_type, wml::types::TableWidthType::Pct);
    assert_eq!(width.value, Some(5000));
    assert_eq!(table.rows()[0].cells()[1].text(), "42");

    let sect = body.section_properties().expect("sectPr");
    let size = sect.page_size().expect("pgSz");
    assert_eq!(size.width().unwrap(), Some(Twips(12240)));
    assert_eq!(sect.margins().expect("pgMar").header().unwrap(), Twips(720));
}

#[test]
fn inline_drawing_reachable_from_run_content() {
    let doc = Document::from_xml(DOCUMENT).expect("document parses");
    let paragraphs = doc.paragraphs().expect("paragraphs");
    let drawing = paragraphs[2]
        .runs()
        .into_iter()
        .flat_map(|run| run.content())
        .find_map(|item| match item {
            RunContent::Drawing(d) => Some(d),
            _ => None,
        })
        .expect("drawing present");
    match drawing.content().unwrap() {
        DrawingContent::Inline(inline) => {
            assert_eq!(inline.extent().unwrap().width().unwrap().0, 914_400);
            assert_eq!(inline.doc_properties().unwrap().name().unwrap(), "Chart 7");
        }
        DrawingContent::Anchor(_) => panic!("expected inline positioning"),
    }
}

#[test]
fn plain_text_covers_cells_in_order() {
    let doc = Document::from_xml(DOCUMENT).expect("document parses");
    assert_eq!(
        doc.plain_text().unwrap(),
        "Quarterly Report\nSee the appendix for details.\nNorth\n42\n\n"
    );
}

#[test]
fn wrong_root_is_rejected() {
    let err = Document::from_xml("<w:body/>").unwrap_err();
    assert!(matches!(err, WmlError::UnexpectedElement { .. }));
}

#[test]
fn missing_body_is_a_schema_violation() {
    let doc = Document::from_xml("<w:document/>").expect("root alone parses");
    assert!(matches!(doc.body(), Err(WmlError::MissingChild { .. })));
}
