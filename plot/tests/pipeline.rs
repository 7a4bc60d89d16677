//! End-to-end checks: CSV text and options in, decoded PNG out.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use plot::render::generate_colors;
use plot::{handle_request, render_plot, PlotOptions, PlotResponse, Point, Range};
use serde_json::json;

const SAMPLE: &str = "t,a\n1,10\n2,20\n3,30\n";

fn decode_image(response: &PlotResponse) -> (png::OutputInfo, Vec<u8>) {
    let PlotResponse::Image { base64_image } = response else {
        panic!("expected an image, got {response:?}");
    };
    let bytes = STANDARD.decode(base64_image).expect("valid base64");
    let decoder = png::Decoder::new(bytes.as_slice());
    let mut reader = decoder.read_info().expect("png header");
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels).expect("png frame");
    (info, pixels)
}

fn error_message(response: &PlotResponse) -> &str {
    match response {
        PlotResponse::Error { error } => error,
        other => panic!("expected an error, got {other:?}"),
    }
}

fn xs(points: &[Point]) -> Vec<f64> {
    points.iter().map(|p| p.x).collect()
}

#[test]
fn sample_csv_renders_three_points() {
    let options = PlotOptions::new(["a"]).with_x_in_first_column(true);
    let plot = render_plot(SAMPLE, &options).unwrap();

    assert_eq!(plot.series.len(), 1);
    assert_eq!(plot.series[0].name, "a");
    assert_eq!(
        plot.series[0].points,
        vec![
            Point { x: 1.0, y: 10.0 },
            Point { x: 2.0, y: 20.0 },
            Point { x: 3.0, y: 30.0 },
        ]
    );
    assert_eq!(plot.ranges.x, Range::new(1.0, 3.0));
    assert_eq!(plot.ranges.y, Range::new(10.0, 30.0));
}

#[test]
fn response_decodes_to_png_of_default_size() {
    let options = json!({ "columns": ["a"], "xdata": true }).to_string();
    let response = handle_request(SAMPLE, &options);
    let (info, pixels) = decode_image(&response);

    assert_eq!((info.width, info.height), (768, 512));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    // Top-left corner is plain background.
    assert_eq!(&pixels[..4], &[255, 255, 255, 255]);
}

#[test]
fn size_string_controls_png_dimensions() {
    let options = json!({ "columns": ["a"], "xdata": true, "size": "300x200" }).to_string();
    let (info, _) = decode_image(&handle_request(SAMPLE, &options));
    assert_eq!((info.width, info.height), (300, 200));

    let options = json!({ "columns": ["a"], "width": 400, "height": 250 }).to_string();
    let (info, _) = decode_image(&handle_request(SAMPLE, &options));
    assert_eq!((info.width, info.height), (400, 250));
}

#[test]
fn markers_use_the_series_color() {
    let options = PlotOptions::new(["a"]).with_x_in_first_column(true);
    let plot = render_plot(SAMPLE, &options).unwrap();
    let color = generate_colors(1)[0];

    assert_eq!(plot.series[0].color, color);
    // (2, 20) is the middle of both ranges.
    assert_eq!(plot.series[0].pixels[1], (384.0, 256.0));
    assert_eq!(plot.canvas.pixel(384, 256), Some(color));
}

#[test]
fn generated_x_counts_rows_from_one() {
    let csv = "v\n7\n8\n9\n10\n";
    let plot = render_plot(csv, &PlotOptions::new(["v"])).unwrap();
    assert_eq!(xs(&plot.series[0].points), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn max_range_drops_points_beyond_cutoff() {
    let csv = "t,a\n1,1\n2,2\n3,3\n4,4\n";
    let options = PlotOptions::new(["a"])
        .with_x_in_first_column(true)
        .with_max_x(2.5);
    let plot = render_plot(csv, &options).unwrap();

    assert_eq!(xs(&plot.series[0].points), vec![1.0, 2.0]);
    assert!(plot.series[0].points.iter().all(|p| p.x <= 2.5));
    assert_eq!(plot.ranges.x, Range::new(1.0, 2.0));
}

#[test]
fn skip_keeps_every_kth_filtered_row() {
    let csv = "v\n10\n11\n12\n13\n14\n15\n16\n";
    let plot = render_plot(csv, &PlotOptions::new(["v"]).with_skip(3)).unwrap();

    assert_eq!(xs(&plot.series[0].points), vec![1.0, 4.0, 7.0]);
    assert_eq!(plot.ranges.y, Range::new(10.0, 16.0));
}

#[test]
fn constant_y_widens_to_unit_range() {
    let plot = render_plot("a\n5\n5\n5\n", &PlotOptions::new(["a"])).unwrap();
    assert_eq!(plot.ranges.y, Range::new(5.0, 6.0));
}

#[test]
fn xscale_relabels_without_moving_points() {
    let options = PlotOptions::new(["a"])
        .with_x_in_first_column(true)
        .with_x_scale("0,100");
    let plot = render_plot(SAMPLE, &options).unwrap();

    assert!(plot.ranges.remap);
    assert_eq!(plot.ranges.display_x, Range::new(0.0, 100.0));
    let pixels = &plot.series[0].pixels;
    assert_eq!(pixels.first().map(|p| p.0), Some(60.0));
    assert_eq!(pixels.last().map(|p| p.0), Some(708.0));
}

#[test]
fn header_only_csv_is_a_parse_error() {
    let err = render_plot("a,b\n", &PlotOptions::new(["a"])).err().unwrap();
    assert_eq!(err.kind(), "ParseError");
    assert_eq!(err.to_string(), "no data rows found in CSV");
}

#[test]
fn stray_quote_fails_instead_of_dropping_the_row() {
    let options = json!({ "columns": ["a"], "xdata": true }).to_string();
    let response = handle_request("t,a\n1,1\"0\n2,20\n", &options);
    assert!(error_message(&response).starts_with("csv read error:"));

    let response = handle_request("t,a\n1,\"10\"x\n2,20\n", &options);
    assert!(error_message(&response).contains("quoted field"));
}

#[test]
fn unknown_columns_are_reported() {
    let options = json!({ "columns": ["missing"] }).to_string();
    let response = handle_request(SAMPLE, &options);
    assert_eq!(
        error_message(&response),
        "none of the specified columns were found in the CSV"
    );
}

#[test]
fn empty_column_list_is_reported() {
    let response = handle_request(SAMPLE, r#"{"columns":[]}"#);
    assert_eq!(error_message(&response), "no columns specified to plot");
}

#[test]
fn tiny_canvas_is_reported() {
    let options = json!({ "columns": ["a"], "width": 100, "height": 100 }).to_string();
    let response = handle_request(SAMPLE, &options);
    assert_eq!(error_message(&response), "image size too small for margins");
}

#[test]
fn malformed_options_are_reported() {
    let response = handle_request(SAMPLE, "{\"columns\": [");
    assert!(error_message(&response).starts_with("Failed to parse options JSON"));
}

#[test]
fn cutoff_that_removes_everything_is_reported() {
    let options = json!({ "columns": ["a"], "xdata": true, "maxRange": 0.5 }).to_string();
    let response = handle_request(SAMPLE, &options);
    assert_eq!(
        error_message(&response),
        "no data points remain after filtering by range"
    );
}

#[test]
fn non_numeric_column_has_no_y_range() {
    let csv = "t,name\n1,alpha\n2,beta\n";
    let options = PlotOptions::new(["name"]).with_x_in_first_column(true);
    let err = render_plot(csv, &options).err().unwrap();
    assert_eq!(err.kind(), "NoValidYError");
}
