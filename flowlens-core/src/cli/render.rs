use crate::ads::{AdRecord, AdStats, AdStatus};
use crate::format::{format_number, format_percentage, format_time, format_timestamp};
use crate::metrics::MetricsReport;
use crate::tiara::{TiaraEvent, extract_unique_action_types};
use owo_colors::{OwoColorize, Rgb};

// one block per 5%
fn bar(count: u64, total: u64) -> String {
    if count == 0 || total == 0 {
        return String::new();
    }
    let pct = count as f64 / total as f64 * 100.0;
    "█".repeat(((pct / 5.0).floor() as usize).max(1))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn push_line(out: &mut String, line: String) {
    out.push_str(line.trim_end());
    out.push('\n');
}

// "#rrggbb"
fn hex_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn status_cell(status: AdStatus, color: bool) -> String {
    let label = format!("{:<9}", status.label());
    match hex_rgb(status.color()).filter(|_| color) {
        Some(rgb) => label.color(rgb).to_string(),
        None => label,
    }
}

fn status_code_cell(code: u16, color: bool) -> String {
    let label = format!("{code:<5}");
    if !color {
        return label;
    }
    match code {
        500.. => label.red().to_string(),
        400..=499 => label.yellow().to_string(),
        300..=399 => label.cyan().to_string(),
        _ => label.green().to_string(),
    }
}

pub fn render_ads(ads: &[&AdRecord], stats: &AdStats, color: bool) -> String {
    let mut out = String::new();

    let ctr = stats
        .ctr
        .map(format_percentage)
        .unwrap_or_else(|| "-".to_string());

    out.push_str(&format!(
        "Ad Tracking\n\
         ===========\n\
         ads: {} | impressed: {} | clicked: {} | CTR: {}\n\n",
        format_number(stats.total),
        format_number(stats.impressed),
        format_number(stats.clicked),
        ctr
    ));

    if ads.is_empty() {
        out.push_str("<no ads>\n");
        return out;
    }

    push_line(
        &mut out,
        format!(
            "  {:<9}  {:<14}  {:<24}  {:<12}  {:<12}  {:<12}",
            "STATUS", "ADSID", "TITLE", "REQUESTED", "IMPRESSION", "CLICK"
        ),
    );

    for ad in ads {
        push_line(
            &mut out,
            format!(
                "  {}  {:<14}  {:<24}  {:<12}  {:<12}  {:<12}",
                status_cell(ad.status, color),
                truncate(&ad.adsid, 14),
                truncate(&ad.title, 24),
                format_timestamp(ad.request_time),
                format_timestamp(ad.impression_time),
                format_timestamp(ad.click_time),
            ),
        );
    }

    out
}

/// `all` feeds the header; `shown` is what survived filtering.
pub fn render_tiara(all: &[TiaraEvent], shown: &[&TiaraEvent], color: bool) -> String {
    let mut out = String::new();

    let action_types = extract_unique_action_types(all);
    let action_types = if action_types.is_empty() {
        "-".to_string()
    } else {
        action_types.join(", ")
    };

    out.push_str(&format!(
        "Tiara Events\n\
         ============\n\
         events: {} (showing {}) | action types: {}\n\n",
        format_number(all.len()),
        format_number(shown.len()),
        action_types
    ));

    if shown.is_empty() {
        out.push_str("<no events>\n");
        return out;
    }

    push_line(
        &mut out,
        format!(
            "  {:<12}  {:<16}  {:<20}  {:<16}  {:<16}  {}",
            "TIME", "ACTION TYPE", "ACTION NAME", "PAGE", "SECTION", "SUMMARY"
        ),
    );

    for event in shown {
        let action_type = format!("{:<16}", truncate(&event.action_type, 16));
        let action_type = if color {
            action_type.cyan().to_string()
        } else {
            action_type
        };

        push_line(
            &mut out,
            format!(
                "  {:<12}  {}  {:<20}  {:<16}  {:<16}  {}",
                format_timestamp(Some(event.timestamp as f64)),
                action_type,
                truncate(&event.action_name, 20),
                truncate(&event.page, 16),
                truncate(&event.section, 16),
                event.summary,
            ),
        );
    }

    out
}

pub fn render_metrics(report: &MetricsReport, color: bool) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let error_rate = format_percentage(summary.error_rate);
    let error_rate = if color && summary.error_rate > 0.0 {
        error_rate.red().to_string()
    } else {
        error_rate
    };

    out.push_str(&format!(
        "Traffic Metrics\n\
         ===============\n\
         requests: {} | errors: {} | avg: {} | slow (>1s): {}\n\n",
        format_number(summary.total_requests),
        error_rate,
        format_time(summary.avg_response_time),
        format_number(summary.slow_queries)
    ));

    if report.status_codes.is_empty() {
        out.push_str("Status codes: <no responses>\n\n");
    } else {
        out.push_str("Status codes:\n");
        let total: u64 = report.status_codes.iter().map(|c| c.count as u64).sum();
        for code in &report.status_codes {
            let pct = code.count as f64 / total as f64 * 100.0;
            push_line(
                &mut out,
                format!(
                    "  {} {:<20} {:>7} {:>6}",
                    status_code_cell(code.code, color),
                    bar(code.count as u64, total),
                    format_number(code.count),
                    format_percentage(pct)
                ),
            );
        }
        out.push('\n');
    }

    if report.domains.is_empty() {
        out.push_str("Domains: <no requests>\n\n");
    } else {
        out.push_str("Domains:\n");
        for domain in &report.domains {
            push_line(
                &mut out,
                format!(
                    "  {:<40} {:>7} {:>8}",
                    truncate(&domain.domain, 40),
                    format_number(domain.count),
                    format_time(domain.avg_time)
                ),
            );
        }
        out.push('\n');
    }

    let latency = &report.latency;
    let total_latency: u64 = latency.buckets.iter().map(|b| b.count).sum();
    if total_latency > 0 {
        out.push_str("Latency:\n");
        for bucket in &latency.buckets {
            let pct = bucket.count as f64 / total_latency as f64 * 100.0;
            push_line(
                &mut out,
                format!(
                    "  {:<10} {:<20} {:>6}",
                    bucket.label,
                    bar(bucket.count, total_latency),
                    format_percentage(pct)
                ),
            );
        }
        out.push_str(&format!(
            "Latency p95 ≈ {}ms | p99 ≈ {}ms\n\n",
            latency.p95_ms, latency.p99_ms
        ));
    } else {
        out.push_str("Latency: <no samples>\n\n");
    }

    if report.response_times.is_empty() {
        out.push_str("Response time trend: <no samples>\n");
    } else {
        out.push_str("Response time trend:\n");
        for point in &report.response_times {
            push_line(
                &mut out,
                format!(
                    "  {:<12} {:>8}",
                    format_timestamp(Some(point.timestamp as f64)),
                    format_time(point.time)
                ),
            );
        }
    }

    out
}
