//! Interactive HTML dashboard reporter
//!
//! Renders an embedded Tera template into a self-contained page: Chart.js
//! from CDN, aggregate data inlined as script literals, and the rule-based
//! recommendation list.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tera::{Context, Tera};

use super::timestamp;
use crate::analytics::aggregate::{AnalyticsData, DurationStats};
use crate::analytics::recommend::recommendations;
use crate::error::Result;

/// Render the dashboard. Returns the artifact path, or `None` when the
/// aggregate holds no data at all.
pub fn generate_html_dashboard(
    data: &AnalyticsData,
    results_dir: &Path,
) -> Result<Option<PathBuf>> {
    if !data.has_data() {
        println!("❌ No data to analyze");
        return Ok(None);
    }

    let html = render_dashboard(data)?;

    fs::create_dir_all(results_dir)?;
    let output_path = results_dir.join(format!("load_test_dashboard_{}.html", timestamp()));
    fs::write(&output_path, html)?;

    println!("📊 HTML dashboard saved as: {}", output_path.display());
    println!("🌐 Open the file in your browser to view the interactive dashboard");
    Ok(Some(output_path))
}

fn render_dashboard(data: &AnalyticsData) -> Result<String> {
    let mut template_engine = Tera::default();
    template_engine.add_raw_template("dashboard.html", DASHBOARD_TEMPLATE)?;

    let total_tests = data.upload_total();
    let success_rate = if total_tests > 0 {
        data.success_count as f64 / total_tests as f64 * 100.0
    } else {
        0.0
    };
    let avg_time = DurationStats::compute(&data.response_times)
        .map(|stats| stats.mean)
        .unwrap_or(0.0);

    // Limit the trend line to 50 points for readability.
    let trend: Vec<u64> = data.response_times.iter().copied().take(50).collect();
    let trend_labels: Vec<usize> = (0..trend.len()).collect();

    let mut file_types: Vec<(&String, &u64)> = data.file_types.iter().collect();
    file_types.sort_by(|a, b| a.0.cmp(b.0));
    let file_type_labels: Vec<&String> = file_types.iter().map(|(label, _)| *label).collect();
    let file_type_counts: Vec<u64> = file_types.iter().map(|(_, count)| **count).collect();

    let mut context = Context::new();
    context.insert(
        "generated_at",
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    context.insert("success_count", &data.success_count);
    context.insert("failure_count", &data.failure_count);
    context.insert("total_tests", &total_tests);
    context.insert("success_rate", &format!("{success_rate:.1}"));
    context.insert("failure_rate", &format!("{:.1}", 100.0 - success_rate));
    context.insert("avg_time", &format!("{avg_time:.0}"));
    context.insert("file_type_labels", &serde_json::to_string(&file_type_labels)?);
    context.insert("file_type_counts", &serde_json::to_string(&file_type_counts)?);
    context.insert("trend_labels", &serde_json::to_string(&trend_labels)?);
    context.insert("trend_values", &serde_json::to_string(&trend)?);
    context.insert("recommendations", &recommendations(data));

    Ok(template_engine.render("dashboard.html", &context)?)
}

const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>📊 Load Testing Analytics Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: #333;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 10px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.3);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(45deg, #2c3e50, #34495e);
            color: white;
            padding: 30px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 2.5em;
            font-weight: 300;
        }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            padding: 30px;
            background: #f8f9fa;
        }
        .stat-card {
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            text-align: center;
            transition: transform 0.3s ease;
        }
        .stat-card:hover {
            transform: translateY(-5px);
        }
        .stat-value {
            font-size: 2.5em;
            font-weight: bold;
            margin: 10px 0;
        }
        .success { color: #27ae60; }
        .failure { color: #e74c3c; }
        .info { color: #3498db; }
        .warning { color: #f39c12; }
        .charts-section {
            padding: 30px;
        }
        .chart-container {
            margin: 30px 0;
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .chart-title {
            font-size: 1.5em;
            font-weight: bold;
            margin-bottom: 20px;
            text-align: center;
        }
        .recommendations {
            background: #fff3cd;
            border: 1px solid #ffeaa7;
            border-radius: 8px;
            padding: 20px;
            margin: 20px 0;
        }
        .recommendations h3 {
            color: #856404;
            margin-top: 0;
        }
        .footer {
            background: #2c3e50;
            color: white;
            text-align: center;
            padding: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 Load Testing Analytics Dashboard</h1>
            <p>Generated on {{ generated_at }}</p>
        </div>

        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-value success">{{ success_count }}</div>
                <h3>✅ Successful Uploads</h3>
                <p>{{ success_rate }}% Success Rate</p>
            </div>

            <div class="stat-card">
                <div class="stat-value failure">{{ failure_count }}</div>
                <h3>❌ Failed Uploads</h3>
                <p>{{ failure_rate }}% Failure Rate</p>
            </div>

            <div class="stat-card">
                <div class="stat-value info">{{ avg_time }}ms</div>
                <h3>⏱️ Average Response Time</h3>
                <p>Overall Performance</p>
            </div>

            <div class="stat-card">
                <div class="stat-value warning">{{ total_tests }}</div>
                <h3>📊 Total Tests</h3>
                <p>Requests Processed</p>
            </div>
        </div>

        <div class="charts-section">
            <div class="chart-container">
                <h3 class="chart-title">📈 Success vs Failure Rate</h3>
                <canvas id="successChart" width="400" height="200"></canvas>
            </div>

            <div class="chart-container">
                <h3 class="chart-title">📁 File Types Distribution</h3>
                <canvas id="fileTypesChart" width="400" height="200"></canvas>
            </div>

            <div class="chart-container">
                <h3 class="chart-title">⏱️ Response Time Trend</h3>
                <canvas id="responseTimeChart" width="400" height="200"></canvas>
            </div>

            <div class="recommendations">
                <h3>💡 Performance Recommendations</h3>
                <ul>
                    {% for rec in recommendations %}
                    <li><strong>{{ rec.title }}</strong> {{ rec.detail }}</li>
                    {% endfor %}
                    <li><strong>📋 General Suggestions:</strong></li>
                    <li>• Monitor PDF conversion process under load</li>
                    <li>• Consider implementing file upload queuing</li>
                    <li>• Review server resource allocation</li>
                    <li>• Implement progressive upload for large files</li>
                </ul>
            </div>
        </div>

        <div class="footer">
            <p>Load Testing Analytics Dashboard | Generated by k6 Log Analyzer</p>
        </div>
    </div>

    <script>
        // Success vs Failure Chart
        const successCtx = document.getElementById('successChart').getContext('2d');
        new Chart(successCtx, {
            type: 'doughnut',
            data: {
                labels: ['Success', 'Failure'],
                datasets: [{
                    data: [{{ success_count }}, {{ failure_count }}],
                    backgroundColor: ['#27ae60', '#e74c3c'],
                    borderWidth: 2,
                    borderColor: '#fff'
                }]
            },
            options: {
                responsive: true,
                plugins: {
                    legend: { position: 'bottom' }
                }
            }
        });

        // File Types Chart
        const fileTypesCtx = document.getElementById('fileTypesChart').getContext('2d');
        new Chart(fileTypesCtx, {
            type: 'bar',
            data: {
                labels: {{ file_type_labels | safe }},
                datasets: [{
                    label: 'Count',
                    data: {{ file_type_counts | safe }},
                    backgroundColor: 'rgba(52, 152, 219, 0.8)',
                    borderColor: 'rgba(52, 152, 219, 1)',
                    borderWidth: 1
                }]
            },
            options: {
                responsive: true,
                scales: { y: { beginAtZero: true } }
            }
        });

        // Response Time Trend
        const responseTimeCtx = document.getElementById('responseTimeChart').getContext('2d');
        new Chart(responseTimeCtx, {
            type: 'line',
            data: {
                labels: {{ trend_labels | safe }},
                datasets: [{
                    label: 'Response Time (ms)',
                    data: {{ trend_values | safe }},
                    borderColor: 'rgba(155, 89, 182, 1)',
                    backgroundColor: 'rgba(155, 89, 182, 0.1)',
                    borderWidth: 2,
                    fill: true
                }]
            },
            options: {
                responsive: true,
                scales: {
                    x: { title: { display: true, text: 'Upload Sequence' } },
                    y: { title: { display: true, text: 'Response Time (ms)' }, beginAtZero: true }
                }
            }
        });
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::models::LogEvent;
    use tempfile::TempDir;

    fn sample_data() -> AnalyticsData {
        let mut data = AnalyticsData::new();
        data.fold_event(
            LogEvent::UploadAttempt {
                file_name: "a.pdf".to_string(),
                byte_size: 10,
            },
            "Scenario 1",
        );
        for duration in [100, 150, 200] {
            data.fold_event(
                LogEvent::UploadSuccess {
                    file_name: "a.pdf".to_string(),
                    duration_ms: duration,
                    artifact_id: "f_1".to_string(),
                },
                "Scenario 1",
            );
        }
        data.fold_event(
            LogEvent::UploadFailure {
                file_name: "b.pdf".to_string(),
                status_code: 500,
            },
            "Scenario 1",
        );
        data.push_scenario("Scenario 1".to_string());
        data
    }

    #[test]
    fn test_render_dashboard_inlines_data() {
        let html = render_dashboard(&sample_data()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("cdn.jsdelivr.net/npm/chart.js"));
        assert!(html.contains("data: [3, 1],"));
        assert!(html.contains("[\"pdf\"]"));
        assert!(html.contains("[100,150,200]"));
        assert!(html.contains("75.0% Success Rate"));
        assert!(html.contains("150ms"));
    }

    #[test]
    fn test_render_dashboard_includes_recommendations() {
        let html = render_dashboard(&sample_data()).unwrap();
        // 75% success rate lands in the moderate tier; 500s get advice.
        assert!(html.contains("Moderate Issues:"));
        assert!(html.contains("Server Errors (500):"));
        assert!(html.contains("General Suggestions:"));
    }

    #[test]
    fn test_no_data_skips_dashboard() {
        let temp = TempDir::new().unwrap();
        let result = generate_html_dashboard(&AnalyticsData::new(), temp.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_dashboard_written_with_timestamped_name() {
        let temp = TempDir::new().unwrap();
        let path = generate_html_dashboard(&sample_data(), temp.path())
            .unwrap()
            .unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("load_test_dashboard_"));
        assert!(name.ends_with(".html"));
    }
}
