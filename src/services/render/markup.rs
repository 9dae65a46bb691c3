//! Markup builders for the progress rows and the widget stylesheet.

use crate::models::progress::{PeriodConfig, PeriodProgress};

pub(crate) const EMPHASIS_CLASS: &str = "cd-many";

/// Stylesheet injected into the host page once per activation.
pub const WIDGET_STYLES: &str = r#"
.card-countdown .item-content {
    display: flex;
}
.cd-count-left {
    position: relative;
    display: flex;
    flex-direction: column;
    margin-right: 0.8rem;
    line-height: 1.5;
    align-items: center;
    justify-content: center;
}
.cd-count-left .cd-text {
    font-size: 14px;
}
.cd-count-left .cd-name {
    font-weight: bold;
    font-size: 18px;
}
.cd-count-left .cd-time {
    font-size: 30px;
    font-weight: bold;
    color: var(--anzhiyu-main);
}
.cd-count-left .cd-date {
    font-size: 12px;
    opacity: 0.6;
}
.cd-count-left::after {
    content: "";
    position: absolute;
    right: -0.8rem;
    width: 2px;
    height: 80%;
    background-color: var(--anzhiyu-main);
    opacity: 0.5;
}
.cd-count-right {
    flex: 1;
    margin-left: .8rem;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}
.cd-count-item {
    display: flex;
    flex-direction: row;
    align-items: center;
    height: 24px;
}
.cd-item-name {
    font-size: 14px;
    margin-right: 0.8rem;
    white-space: nowrap;
}
.cd-item-progress {
    position: relative;
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
    height: 100%;
    width: 100%;
    border-radius: 8px;
    background-color: var(--anzhiyu-background);
    overflow: hidden;
}
.cd-progress-bar {
    height: 100%;
    border-radius: 8px;
    background-color: var(--anzhiyu-main);
}
.cd-percentage,
.cd-remaining {
    position: absolute;
    font-size: 12px;
    margin: 0 6px;
    transition: opacity 0.3s ease-in-out, transform 0.3s ease-in-out;
}
.cd-many {
    color: #fff;
}
.cd-remaining {
    opacity: 0;
    transform: translateX(10px);
}
.card-countdown .item-content:hover .cd-remaining {
    transform: translateX(0);
    opacity: 1;
}
.card-countdown .item-content:hover .cd-percentage {
    transform: translateX(-10px);
    opacity: 0;
}
"#;

/// Emphasis thresholds for one row, in percent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Emphasis {
    pub percentage_at: f64,
    pub remaining_at: f64,
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn emphasis_class(on: bool) -> &'static str {
    if on {
        EMPHASIS_CLASS
    } else {
        ""
    }
}

pub(crate) fn progress_row(
    config: &PeriodConfig,
    progress: &PeriodProgress,
    tip: &str,
    emphasis: Emphasis,
) -> String {
    let percentage = progress.percentage;
    format!(
        concat!(
            r#"<div class="cd-count-item">"#,
            r#"<div class="cd-item-name">{label}</div>"#,
            r#"<div class="cd-item-progress">"#,
            r#"<div class="cd-progress-bar" style="width: {width}%; opacity: {opacity}"></div>"#,
            r#"<span class="cd-percentage {pct_class}">{percentage:.2}%</span>"#,
            r#"<span class="cd-remaining {rem_class}">"#,
            r#"<span class="cd-tip">{tip}</span>{remaining}<span class="cd-tip">{unit}</span>"#,
            r#"</span></div></div>"#,
        ),
        label = escape_html(&config.label),
        width = percentage,
        opacity = percentage / 100.0,
        pct_class = emphasis_class(percentage >= emphasis.percentage_at),
        percentage = percentage,
        rem_class = emphasis_class(percentage >= emphasis.remaining_at),
        tip = escape_html(tip),
        remaining = progress.remaining,
        unit = escape_html(&config.unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPHASIS: Emphasis = Emphasis {
        percentage_at: 46.0,
        remaining_at: 60.0,
    };

    fn row(percentage: f64, remaining: i64) -> String {
        progress_row(
            &PeriodConfig::new("本周", "天"),
            &PeriodProgress {
                remaining,
                percentage,
            },
            "还剩",
            EMPHASIS,
        )
    }

    #[test]
    fn test_row_below_thresholds_has_no_emphasis() {
        let html = row(14.285714285714286, 6);
        assert!(html.contains("14.29%"));
        assert!(html.contains("本周"));
        assert!(html.contains(r#"<span class="cd-tip">还剩</span>6<span class="cd-tip">天</span>"#));
        assert!(!html.contains(EMPHASIS_CLASS));
    }

    #[test]
    fn test_percentage_emphasis_starts_at_46() {
        let html = row(46.0, 3);
        assert!(html.contains(r#"class="cd-percentage cd-many""#));
        assert!(html.contains(r#"class="cd-remaining ""#));
    }

    #[test]
    fn test_remaining_emphasis_starts_at_60() {
        let html = row(60.0, 2);
        assert!(html.contains(r#"class="cd-percentage cd-many""#));
        assert!(html.contains(r#"class="cd-remaining cd-many""#));
    }

    #[test]
    fn test_bar_width_and_opacity() {
        let html = row(50.0, 12);
        assert!(html.contains("width: 50%; opacity: 0.5"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let html = progress_row(
            &PeriodConfig::new("<b>day</b>", "h&m"),
            &PeriodProgress {
                remaining: 1,
                percentage: 0.0,
            },
            "left",
            EMPHASIS,
        );
        assert!(html.contains("&lt;b&gt;day&lt;/b&gt;"));
        assert!(html.contains("h&amp;m"));
    }

    #[test]
    fn test_styles_define_emphasis_class() {
        assert!(WIDGET_STYLES.contains(".cd-many"));
        assert!(WIDGET_STYLES.contains(".cd-progress-bar"));
    }
}
