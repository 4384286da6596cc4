//! Serialize the sitemap to sitemap-protocol XML.

use crate::sitemap::Sitemap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;

const URLSET_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the document as a `urlset` per the sitemap protocol.
///
/// Entry order is preserved; `lastmod` is `YYYY-MM-DD` and `priority` is
/// printed to one decimal place.
pub fn to_xml(sitemap: &Sitemap) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(io::Error::other)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", URLSET_XMLNS));
    writer
        .write_event(Event::Start(urlset))
        .map_err(io::Error::other)?;

    for entry in &sitemap.entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(io::Error::other)?;

        write_text_element(&mut writer, "loc", &sitemap.loc(entry))?;
        write_text_element(
            &mut writer,
            "lastmod",
            &entry.last_modified.format("%Y-%m-%d").to_string(),
        )?;
        write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(io::Error::other)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(io::Error::other)?;

    String::from_utf8(writer.into_inner()).map_err(io::Error::other)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(io::Error::other)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(io::Error::other)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(io::Error::other)?;
    Ok(())
}
