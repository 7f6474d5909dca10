use std::fmt::Write as _;

use crate::models::TestRecord;
use crate::stats::DashboardSummary;

/// Render the dashboard document.
///
/// Pure: output depends only on the arguments, so a fixed `timestamp`
/// reproduces the page byte-for-byte. We substitute tokens instead of using
/// `format!()` because the CSS is full of `{}` blocks that would conflict
/// with Rust formatting.
pub fn render_dashboard(
    summary: &DashboardSummary,
    tests: &[TestRecord],
    timestamp: &str,
) -> String {
    let rate = if summary.total == 0 {
        "0".to_string()
    } else {
        fmt_rounded(summary.success_rate, 1)
    };

    TEMPLATE
        .replace("__TIMESTAMP__", &escape_html(timestamp))
        .replace("__TOTAL__", &summary.total.to_string())
        .replace("__PASSED__", &summary.passed.to_string())
        .replace("__FAILED__", &summary.failed.to_string())
        .replace("__SKIPPED__", &summary.skipped.to_string())
        .replace("__DURATION__", &fmt_rounded(summary.aggregate_duration, 2))
        .replace("__RATE__", &rate)
        .replace("__TESTS__", &render_test_items(tests))
}

/// One detail block per test, in the report's original order.
fn render_test_items(tests: &[TestRecord]) -> String {
    let mut items = String::new();
    for test in tests {
        let class = test.outcome.css_class();
        let _ = write!(
            items,
            "\n      <div class=\"test-item {class}\">\n        \
             <div class=\"test-name\"><span class=\"badge {class}\">{outcome}</span> {name}</div>\n        \
             <div class=\"test-meta\">duration: {duration}s</div>\n",
            outcome = escape_html(test.outcome.as_str()),
            name = escape_html(&test.id),
            duration = fmt_rounded(test.duration(), 3),
        );
        if let Some(error) = test.error_text() {
            let _ = write!(
                items,
                "        <div class=\"test-error\">{}</div>\n",
                escape_html(error)
            );
        }
        items.push_str("      </div>");
    }
    items
}

/// Round to `decimals` places, trimming trailing zeros but keeping at least
/// one decimal: `1.50` renders as `1.5`, `1.0` stays `1.0`.
fn fmt_rounded(value: f64, decimals: usize) -> String {
    let mut s = format!("{value:.decimals$}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>API Test Dashboard</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      padding: 20px;
      min-height: 100vh;
    }

    .container {
      max-width: 1200px;
      margin: 0 auto;
      background: white;
      border-radius: 15px;
      box-shadow: 0 20px 60px rgba(0,0,0,0.3);
      overflow: hidden;
    }

    .header {
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 30px;
      text-align: center;
    }

    .header h1 { font-size: 2.5em; margin-bottom: 10px; }
    .header p { font-size: 1.1em; opacity: 0.9; }
    .header .generated { font-size: 0.9em; margin-top: 10px; }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 20px;
      padding: 30px;
      background: #f8f9fa;
    }

    .stat-card {
      background: white;
      padding: 20px;
      border-radius: 10px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      text-align: center;
    }

    .stat-card .number { font-size: 3em; font-weight: bold; margin: 10px 0; }

    .stat-card .label {
      color: #666;
      font-size: 0.9em;
      text-transform: uppercase;
      letter-spacing: 1px;
    }

    .passed .number { color: #28a745; }
    .failed .number { color: #dc3545; }
    .skipped .number { color: #ffc107; }
    .total .number { color: #667eea; }
    .duration .number { font-size: 2em; }
    .success-rate .number { color: #17a2b8; }

    .progress-wrap { padding: 0 30px; }

    .progress-bar {
      width: 100%;
      height: 30px;
      background: #e9ecef;
      border-radius: 15px;
      overflow: hidden;
      margin: 20px 0;
    }

    .progress-fill {
      height: 100%;
      background: linear-gradient(90deg, #28a745 0%, #20c997 100%);
      display: flex;
      align-items: center;
      justify-content: center;
      color: white;
      font-weight: bold;
    }

    .tests-section { padding: 30px; }

    .tests-section h2 {
      color: #333;
      margin-bottom: 20px;
      border-bottom: 3px solid #667eea;
      padding-bottom: 10px;
    }

    .test-item {
      background: #f8f9fa;
      padding: 15px;
      margin-bottom: 10px;
      border-radius: 8px;
      border-left: 5px solid #ddd;
    }

    .test-item.passed { border-left-color: #28a745; background: #d4edda; }
    .test-item.failed { border-left-color: #dc3545; background: #f8d7da; }
    .test-item.skipped { border-left-color: #ffc107; background: #fff3cd; }

    .test-name { font-weight: bold; color: #333; margin-bottom: 5px; }
    .test-meta { font-size: 0.9em; color: #666; }

    .test-error {
      margin-top: 10px;
      padding: 10px;
      background: white;
      border-radius: 5px;
      font-family: 'Courier New', monospace;
      font-size: 0.85em;
      color: #721c24;
      white-space: pre-wrap;
      max-height: 200px;
      overflow-y: auto;
    }

    .badge {
      display: inline-block;
      padding: 5px 10px;
      border-radius: 20px;
      font-size: 0.85em;
      font-weight: bold;
      text-transform: uppercase;
    }

    .badge.passed { background: #28a745; color: white; }
    .badge.failed { background: #dc3545; color: white; }
    .badge.skipped { background: #ffc107; color: #333; }

    .footer {
      background: #333;
      color: white;
      text-align: center;
      padding: 20px;
      font-size: 0.9em;
    }
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>API Test Dashboard</h1>
      <p>TMDB API automated test run</p>
      <p class="generated">Generated: __TIMESTAMP__</p>
    </div>

    <div class="stats">
      <div class="stat-card total">
        <div class="label">Total tests</div>
        <div class="number">__TOTAL__</div>
      </div>
      <div class="stat-card passed">
        <div class="label">Passed</div>
        <div class="number">__PASSED__</div>
      </div>
      <div class="stat-card failed">
        <div class="label">Failed</div>
        <div class="number">__FAILED__</div>
      </div>
      <div class="stat-card skipped">
        <div class="label">Skipped</div>
        <div class="number">__SKIPPED__</div>
      </div>
      <div class="stat-card duration">
        <div class="label">Test time</div>
        <div class="number">__DURATION__s</div>
      </div>
      <div class="stat-card success-rate">
        <div class="label">Success rate</div>
        <div class="number">__RATE__%</div>
      </div>
    </div>

    <div class="progress-wrap">
      <div class="progress-bar">
        <div class="progress-fill" style="width: __RATE__%">__RATE__% passing</div>
      </div>
    </div>

    <div class="tests-section">
      <h2>Test details</h2>__TESTS__
    </div>

    <div class="footer">
      <p>Automated API testing</p>
      <p>pytest + TMDB API</p>
    </div>
  </div>
</body>
</html>
"#;
