//! Full schedule page: header, table, footer.

use tracing::debug;

use crate::schedule::ScheduleRow;
use crate::style::StyleConfig;

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Person to contact about speaking slots.
    pub contact_name: String,
    /// Their e-mail username (rendered as `<em>username</em>@nrao.edu`).
    pub contact_username: String,
    /// Cell styles.
    pub style: StyleConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            contact_name: "Dillon Dong".to_string(),
            contact_username: "ddong".to_string(),
            style: StyleConfig::default(),
        }
    }
}

const VENUE: &str = r#"<p>Wednesday Lunch is held in the auditorium of the <a class="internal-link" href="../../../../about/socorro/maps">Domenici Science Operations Center (DSOC)</a> in Socorro, New Mexico from <span><strong>noon until 1:00 PM</strong></span> unless indicated. All are welcome.</p>"#;

const TABLE_OPEN: &str = r#"<table class="grid listing" style="width: 100%; border-collapse: collapse;">
<tbody>"#;

const FOOTER: &str = r#"
</tbody>
</table>
<p> </p>
<h2><a class="internal-link" href="overview" target="_self" title=""><span class="internal-link">Wednesday Lunch schedules from previous years</span></a></h2>
<p> </p>
<h1>Other Astrophysics Colloquia</h1>
<ul>
<li><a class="internal-link" href="../coll" target="_self" title="">NRAO Socorro Colloquia</a></li>
<li><a href="http://www.cv.nrao.edu/colloq/">NRAO Charlottesville Colloquia</a></li>
<li><a class="external-link" href="http://www.cv.nrao.edu/tuna/" target="_self" title="">NRAO Charlottesville Lunch Seminar (TUNA)</a></li>
<li><a class="external-link" href="../../../gbt/colloquia-talks/">NRAO Green Bank Colloquia</a></li>
</ul>
<ul>
<li><a class="external-link" href="http://physics.nmt.edu/events/" target="_self" title="">NMT Physics Dept. Colloquia</a> (Socorro, NM)</li>
<li><a class="external-link" href="http://panda.unm.edu/pandaweb/events/index.php?display=series&amp;series_id=6">UNM Physics &amp; Astronomy Dept. Colloquia </a>(Albuquerque, NM)</li>
<li><a href="http://astronomy.nmsu.edu/dept/html/talks.colloq.shtml">NMSU Astronomy Dept. Colloquia </a>(Las Cruces, NM)</li>
</ul>"#;

/// Renders the schedule page as one HTML fragment.
pub fn render_page(rows: &[ScheduleRow], page: &PageConfig) -> String {
    let date_style = page.style.date_cell_style();
    let content_style = page.style.content_cell_style();

    let mut html = format!(
        "<p>Wednesday Lunch is an informal lunchtime get-together with pizza to hear visitors' \
         results as well as what staff are doing. If you or one of your visitors would like to \
         speak at Wednesday Lunch, please contact {} (username {}) at <em>username</em>@nrao.edu.</p>\n\n\
         {VENUE}\n\n{TABLE_OPEN}",
        page.contact_name, page.contact_username,
    );

    for row in rows {
        let label = row.date_label();
        let content = row.content();
        if !content.is_empty() {
            debug!(date = %label, content = %content, "rendering holiday row");
        }
        html.push_str(&format!(
            r#"
<tr class="{class}">
<th style="{date_style}">
<div>
<div class="visualClear" id="{id}"><strong>{label}</strong></div>
<div class="visualClear"><span><span>Noon MT</span></span></div>
</div>
</th>
<td style="{content_style}">
{content}
</td>
</tr>"#,
            class = row.class().as_str(),
            id = row.anchor_id(),
        ));
    }

    html.push_str(FOOTER);
    html
}
