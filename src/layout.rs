use crate::model::{Alignment, Page, Paragraph, Run};
use crate::pdf::{PageContent, PlacedImage, TextSpan};

/// Margin used for pages without any content.
const EMPTY_PAGE_MARGIN: f32 = 72.0;

/// Share of the font size above and below the baseline counted as the line box.
const ASCENT: f32 = 0.8;
const DESCENT: f32 = 0.2;

/// Thresholds that drive text reconstruction. Font-relative values are multiples of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Horizontal gap between spans that reads as a word break.
    pub word_gap: f32,
    /// Vertical distance within which spans share a baseline.
    pub baseline_tolerance: f32,
    /// Largest baseline step between two lines of the same paragraph.
    pub paragraph_gap: f32,
    /// Absolute slack, in points, when comparing line edges.
    pub indent_tolerance: f32,
    /// A line ending this far (share of content width) before the right edge closes its paragraph.
    pub short_line: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            word_gap: 0.15,
            baseline_tolerance: 0.3,
            paragraph_gap: 1.6,
            indent_tolerance: 6.0,
            short_line: 0.15,
        }
    }
}

struct Line {
    baseline: f32,
    x_min: f32,
    x_max: f32,
    font_size: f32,
    runs: Vec<Run>,
}

impl Line {
    fn top(&self) -> f32 {
        self.baseline + self.font_size * ASCENT
    }

    fn bottom(&self) -> f32 {
        self.baseline - self.font_size * DESCENT
    }
}

fn span_run(span: &TextSpan) -> Run {
    Run {
        text: span.text.clone(),
        // Half-point precision, as in the output format.
        font_size: (span.font_size * 2.0).round() / 2.0,
        font_name: span.font.name.clone(),
        bold: span.font.bold,
        italic: span.font.italic,
        color: span.color,
    }
}

/// Append `run`, merging it into the previous run when the styles match.
fn push_run(runs: &mut Vec<Run>, run: Run) {
    match runs.last_mut() {
        Some(last) if last.same_style(&run) => last.text.push_str(&run.text),
        _ => runs.push(run),
    }
}

fn ends_with_space(runs: &[Run]) -> bool {
    runs.last()
        .and_then(|r| r.text.chars().last())
        .is_some_and(char::is_whitespace)
}

/// Group spans into lines that share a baseline, ordered top to bottom.
fn build_lines(spans: &[TextSpan], settings: &LayoutSettings) -> Vec<Line> {
    let mut order: Vec<&TextSpan> = spans.iter().filter(|s| s.font_size > 0.0).collect();
    order.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let mut groups: Vec<Vec<&TextSpan>> = Vec::new();
    for span in order {
        match groups.last_mut() {
            Some(group)
                if (group[0].y - span.y).abs()
                    <= settings.baseline_tolerance * group[0].font_size.max(span.font_size) =>
            {
                group.push(span)
            }
            _ => groups.push(vec![span]),
        }
    }

    groups
        .into_iter()
        .map(|mut group| {
            group.sort_by(|a, b| a.x.total_cmp(&b.x));
            let mut runs: Vec<Run> = Vec::new();
            let mut prev: Option<&TextSpan> = None;
            for &span in &group {
                if let Some(p) = prev {
                    // Fake bold: the same text drawn again with a tiny offset.
                    if p.text == span.text && (p.x - span.x).abs() < 1.0 {
                        continue;
                    }
                    let gap = span.x - (p.x + p.width);
                    let size = p.font_size.max(span.font_size);
                    if gap > settings.word_gap * size
                        && !ends_with_space(&runs)
                        && !span.text.starts_with(char::is_whitespace)
                    {
                        if let Some(last) = runs.last_mut() {
                            last.text.push(' ');
                        }
                    }
                }
                push_run(&mut runs, span_run(span));
                prev = Some(span);
            }

            let baseline = group.iter().map(|s| s.y).sum::<f32>() / group.len() as f32;
            Line {
                baseline,
                x_min: group.iter().map(|s| s.x).fold(f32::INFINITY, f32::min),
                x_max: group.iter().map(|s| s.x + s.width).fold(f32::NEG_INFINITY, f32::max),
                font_size: group.iter().map(|s| s.font_size).fold(0.0, f32::max),
                runs,
            }
        })
        .collect()
}

struct ContentBox {
    left: f32,
    right: f32,
}

impl ContentBox {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }
}

/// Split lines into paragraphs by vertical rhythm, left edge and line length.
fn group_paragraphs<'l>(
    lines: &'l [Line],
    bounds: &ContentBox,
    settings: &LayoutSettings,
) -> Vec<&'l [Line]> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    for i in 1..lines.len() {
        let prev = &lines[i - 1];
        let line = &lines[i];
        let step = prev.baseline - line.baseline;
        let para_left = lines[start..i].iter().map(|l| l.x_min).fold(f32::INFINITY, f32::min);

        let close_enough = step > 0.0 && step <= settings.paragraph_gap * prev.font_size;
        let similar_size = (line.font_size - prev.font_size).abs() <= prev.font_size * 0.25;
        // Allow a first-line indent: the second line may start left of the first.
        let aligned = (line.x_min - para_left).abs() <= settings.indent_tolerance
            || (i - start == 1 && line.x_min < prev.x_min);
        let prev_full = bounds.right - prev.x_max <= settings.short_line * bounds.width();

        if !(close_enough && similar_size && aligned && prev_full) {
            paragraphs.push(&lines[start..i]);
            start = i;
        }
    }
    if start < lines.len() {
        paragraphs.push(&lines[start..]);
    }
    paragraphs
}

fn alignment(lines: &[Line], bounds: &ContentBox, settings: &LayoutSettings) -> Alignment {
    let tol = settings.indent_tolerance;
    let gaps: Vec<(f32, f32)> = lines
        .iter()
        .map(|l| (l.x_min - bounds.left, bounds.right - l.x_max))
        .collect();

    if gaps.iter().all(|(l, r)| *l > tol && *r > tol && (l - r).abs() <= tol) {
        return Alignment::Center;
    }
    if gaps.iter().all(|(l, r)| *r <= tol && *l > tol) {
        return Alignment::Right;
    }
    if gaps.len() > 1 && gaps[..gaps.len() - 1].iter().all(|(l, r)| *l <= tol && *r <= tol) {
        return Alignment::Justify;
    }
    Alignment::Left
}

/// Join the lines of one paragraph into runs, undoing end-of-line hyphenation.
fn paragraph_runs(lines: &[Line]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for line in lines {
        if let Some(last) = runs.last_mut() {
            let trimmed_len = last.text.trim_end().len();
            last.text.truncate(trimmed_len);
            let mut chars = last.text.chars().rev();
            let hyphenated = chars.next() == Some('-') && chars.next().is_some_and(char::is_alphabetic);
            if hyphenated {
                last.text.pop();
            } else {
                last.text.push(' ');
            }
        }
        for run in &line.runs {
            push_run(&mut runs, run.clone());
        }
    }
    if let Some(last) = runs.last_mut() {
        let trimmed_len = last.text.trim_end().len();
        last.text.truncate(trimmed_len);
    }
    if let Some(first) = runs.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    runs.retain(|r| !r.text.is_empty());
    runs
}

enum Block<'a> {
    Text(&'a [Line]),
    Image(PlacedImage),
}

impl Block<'_> {
    fn top(&self) -> f32 {
        match self {
            Block::Text(lines) => lines[0].top(),
            Block::Image(img) => img.y + img.image.display_height,
        }
    }

    fn bottom(&self) -> f32 {
        match self {
            Block::Text(lines) => lines[lines.len() - 1].bottom(),
            Block::Image(img) => img.y,
        }
    }
}

/// Rebuild a page's paragraphs from its positioned text and images.
pub(crate) fn layout_page(content: PageContent, settings: &LayoutSettings) -> Page {
    let lines = build_lines(&content.spans, settings);

    let mut left = f32::INFINITY;
    let mut right = f32::NEG_INFINITY;
    let mut top = f32::NEG_INFINITY;
    let mut bottom = f32::INFINITY;
    for line in &lines {
        left = left.min(line.x_min);
        right = right.max(line.x_max);
        top = top.max(line.top());
        bottom = bottom.min(line.bottom());
    }
    for img in &content.images {
        left = left.min(img.x);
        right = right.max(img.x + img.image.display_width);
        top = top.max(img.y + img.image.display_height);
        bottom = bottom.min(img.y);
    }

    if !left.is_finite() {
        return Page {
            width: content.width,
            height: content.height,
            margin_top: EMPTY_PAGE_MARGIN,
            margin_bottom: EMPTY_PAGE_MARGIN,
            margin_left: EMPTY_PAGE_MARGIN,
            margin_right: EMPTY_PAGE_MARGIN,
            paragraphs: Vec::new(),
        };
    }

    let margin_left = left.clamp(0.0, content.width);
    let margin_right = (content.width - right).clamp(0.0, content.width - margin_left);
    let margin_top = (content.height - top).clamp(0.0, content.height);
    let margin_bottom = bottom.clamp(0.0, content.height - margin_top);
    let bounds = ContentBox { left: margin_left, right: content.width - margin_right };

    let mut blocks: Vec<Block> = group_paragraphs(&lines, &bounds, settings)
        .into_iter()
        .map(Block::Text)
        .collect();
    blocks.extend(content.images.into_iter().map(Block::Image));
    blocks.sort_by(|a, b| b.top().total_cmp(&a.top()));

    let mut paragraphs = Vec::with_capacity(blocks.len());
    let mut prev_bottom: Option<f32> = None;
    for block in blocks {
        let space_before = prev_bottom.map_or(0.0, |b| (b - block.top()).max(0.0));
        prev_bottom = Some(block.bottom());
        match block {
            Block::Text(lines) => {
                let alignment = alignment(lines, &bounds, settings);
                let indent_left = match alignment {
                    Alignment::Left | Alignment::Justify => {
                        let x_min = lines.iter().map(|l| l.x_min).fold(f32::INFINITY, f32::min);
                        (x_min - bounds.left).max(0.0)
                    }
                    Alignment::Center | Alignment::Right => 0.0,
                };
                let line_spacing = (lines.len() > 1).then(|| {
                    (lines[0].baseline - lines[lines.len() - 1].baseline)
                        / (lines.len() - 1) as f32
                });
                let runs = paragraph_runs(lines);
                if runs.is_empty() {
                    continue;
                }
                paragraphs.push(Paragraph {
                    runs,
                    space_before,
                    alignment,
                    indent_left,
                    line_spacing,
                    image: None,
                });
            }
            Block::Image(img) => {
                paragraphs.push(Paragraph {
                    runs: Vec::new(),
                    space_before,
                    alignment: Alignment::Left,
                    indent_left: (img.x - bounds.left).max(0.0),
                    line_spacing: None,
                    image: Some(img.image),
                });
            }
        }
    }

    Page {
        width: content.width,
        height: content.height,
        margin_top,
        margin_bottom,
        margin_left,
        margin_right,
        paragraphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontInfo;
    use std::rc::Rc;

    fn span(text: &str, x: f32, y: f32, size: f32) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            x,
            y,
            width: text.chars().count() as f32 * size * 0.5,
            font_size: size,
            font: Rc::new(FontInfo::fallback()),
            color: None,
        }
    }

    fn layout(spans: Vec<TextSpan>) -> Page {
        let content = PageContent { width: 612.0, height: 792.0, spans, images: Vec::new() };
        layout_page(content, &LayoutSettings::default())
    }

    #[test]
    fn spans_on_one_baseline_form_a_line() {
        let page = layout(vec![span("world", 108.0, 700.2, 12.0), span("Hello", 72.0, 700.0, 12.0)]);
        assert_eq!(page.paragraphs.len(), 1);
        assert_eq!(page.paragraphs[0].text(), "Hello world");
    }

    #[test]
    fn adjacent_spans_get_no_space() {
        let page = layout(vec![span("Hel", 72.0, 700.0, 12.0), span("lo", 90.0, 700.0, 12.0)]);
        assert_eq!(page.paragraphs[0].text(), "Hello");
    }

    #[test]
    fn wide_gap_starts_new_paragraph() {
        let page = layout(vec![
            span("First paragraph text", 72.0, 700.0, 12.0),
            span("Second paragraph tx", 72.0, 600.0, 12.0),
        ]);
        assert_eq!(page.paragraphs.len(), 2);
        assert!(page.paragraphs[1].space_before > 70.0);
        assert_eq!(page.paragraphs[0].space_before, 0.0);
    }

    #[test]
    fn wrapped_lines_join_and_dehyphenate() {
        let page = layout(vec![
            span("This sentence is hyphen-", 72.0, 700.0, 12.0),
            span("ated across two lines", 72.0, 686.0, 12.0),
        ]);
        assert_eq!(page.paragraphs.len(), 1);
        assert_eq!(page.paragraphs[0].text(), "This sentence is hyphenated across two lines");
        assert_eq!(page.paragraphs[0].line_spacing, Some(14.0));
    }

    #[test]
    fn short_line_closes_paragraph() {
        let page = layout(vec![
            span("A long line that spans the whole content box", 72.0, 700.0, 12.0),
            span("Short end.", 72.0, 686.0, 12.0),
            span("A new paragraph starting right after it here", 72.0, 672.0, 12.0),
        ]);
        assert_eq!(page.paragraphs.len(), 2);
        assert_eq!(page.paragraphs[1].text(), "A new paragraph starting right after it here");
    }

    #[test]
    fn centered_heading_is_detected() {
        let body = "A body line that defines the left and right edge";
        // The body spans 72..360, so a 30pt wide title centered in it starts at 201.
        let page = layout(vec![span("Title", 201.0, 740.0, 12.0), span(body, 72.0, 700.0, 12.0)]);
        assert_eq!(page.paragraphs[0].alignment, Alignment::Center);
        assert_eq!(page.paragraphs[0].indent_left, 0.0);

        let page = layout(vec![span("Title", 100.0, 740.0, 12.0), span(body, 72.0, 700.0, 12.0)]);
        assert_eq!(page.paragraphs[0].alignment, Alignment::Left);
        assert_eq!(page.paragraphs[0].indent_left, 28.0);
    }

    #[test]
    fn full_width_lines_are_justified() {
        let full = ["word"; 10].join(" ");
        let page = layout(vec![
            span(&full, 72.0, 700.0, 12.0),
            span(&full, 72.0, 686.0, 12.0),
            span("End.", 72.0, 672.0, 12.0),
        ]);
        assert_eq!(page.paragraphs.len(), 1);
        assert_eq!(page.paragraphs[0].alignment, Alignment::Justify);

        let page = layout(vec![span(&full, 72.0, 700.0, 12.0)]);
        assert_eq!(page.paragraphs[0].alignment, Alignment::Left);
    }

    #[test]
    fn flush_right_line_is_right_aligned() {
        let body = ["word"; 10].join(" ");
        // The body spans 72..366; a 17 character signature ending there starts at 264.
        let page = layout(vec![
            span(&body, 72.0, 700.0, 12.0),
            span("Signed, A. Writer", 264.0, 600.0, 12.0),
        ]);
        assert_eq!(page.paragraphs.len(), 2);
        assert_eq!(page.paragraphs[0].alignment, Alignment::Left);
        assert_eq!(page.paragraphs[1].alignment, Alignment::Right);
    }

    #[test]
    fn margins_follow_content_bounds() {
        let page = layout(vec![span("Body", 90.0, 700.0, 10.0)]);
        assert_eq!(page.margin_left, 90.0);
        assert_eq!(page.margin_right, 612.0 - 110.0);
        assert_eq!(page.margin_top, 792.0 - 708.0);
        assert_eq!(page.margin_bottom, 698.0);
    }

    #[test]
    fn empty_page_keeps_default_margins() {
        let page = layout(Vec::new());
        assert!(page.paragraphs.is_empty());
        assert_eq!(page.margin_left, EMPTY_PAGE_MARGIN);
    }

    #[test]
    fn duplicate_fake_bold_span_is_dropped() {
        let page = layout(vec![span("Bold", 72.0, 700.0, 12.0), span("Bold", 72.4, 700.0, 12.0)]);
        assert_eq!(page.paragraphs[0].text(), "Bold");
    }
}
