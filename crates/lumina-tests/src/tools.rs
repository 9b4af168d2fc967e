//! Integration tests for the tool flows.
//!
//! Exercises lumina-ai end to end: uploads as data URLs, transforms from
//! lumina-effects and lumina-color, PNG results saved under each tool's
//! download name.

use lumina_ai::{StudioConfig, ToolInputs, ToolKind, TransformEngine, TransformRequest};
use lumina_color::GradeKind;
use lumina_core::{BrushMapping, Execution, LuminaError, MaskBuffer, RasterBuffer};
use lumina_effects::{smooth_masked, InpaintParams};
use lumina_media::ImageResource;

// ── Helpers ────────────────────────────────────────────────────

fn upload(buf: &RasterBuffer) -> ImageResource {
    // Round-trip through a data URL the way the upload widget hands it over.
    let url = ImageResource::encode(buf).unwrap().to_data_url();
    ImageResource::from_data_url(&url).unwrap()
}

fn sequential_engine() -> TransformEngine {
    let mut config = StudioConfig::default();
    config.processing.parallel = false;
    TransformEngine::new(config).unwrap()
}

fn gradient(w: u32, h: u32) -> RasterBuffer {
    RasterBuffer::from_fn(w, h, |x, y| {
        [(x * 255 / w) as u8, (y * 255 / h) as u8, 90, 255]
    })
    .unwrap()
}

// ── Background removal ────────────────────────────────────────

#[test]
fn background_removal_flow() {
    let content = RasterBuffer::from_fn(2, 1, |x, _| {
        if x == 0 {
            [255, 255, 255, 255]
        } else {
            [10, 200, 10, 255]
        }
    })
    .unwrap();
    let engine = TransformEngine::default();
    let out = engine
        .process(ToolKind::BackgroundRemoval, &ToolInputs::with_content(upload(&content)))
        .unwrap();
    assert_eq!(out.filename, "background-removed.png");

    let result = out.resource.decode().unwrap();
    assert_eq!(result.pixel(0, 0), [255, 255, 255, 0]);
    assert_eq!(result.pixel(1, 0), [10, 200, 10, 255]);
}

// ── Object removal ─────────────────────────────────────────────

#[test]
fn object_removal_with_display_space_brush() {
    let content = gradient(40, 40);
    let mut config = StudioConfig::default();
    config.object_removal.brush_radius = 2.0;

    // The image is shown at half size; one stroke across the middle.
    let mapping = BrushMapping::new((20.0, 20.0), content.dimensions()).unwrap();
    let mut mask = MaskBuffer::for_content(&content).unwrap();
    config
        .object_removal
        .paint_stroke(&mut mask, &mapping, (5.0, 10.0), (15.0, 10.0))
        .unwrap();
    // Half-alpha brush: overlapping dabs build coverage past the threshold.
    assert!(mask.coverage(20, 20) > config.object_removal.brush_alpha);
    assert!(mask.selected_count(config.object_removal.mask_threshold) > 0);

    let inputs = ToolInputs {
        mask: Some(mask.clone()),
        ..ToolInputs::with_content(upload(&content))
    };
    let engine = TransformEngine::new(config).unwrap();
    let out = engine.process(ToolKind::ObjectRemoval, &inputs).unwrap();
    assert_eq!(out.filename, "object-removed.png");

    let result = out.resource.decode().unwrap();
    assert_eq!(result.dimensions(), content.dimensions());
    // Pixels outside the mask are untouched; alpha is never modified.
    for y in 0..40 {
        for x in 0..40 {
            if mask.coverage(x, y) == 0 {
                assert_eq!(result.pixel(x, y), content.pixel(x, y));
            }
            assert_eq!(result.pixel(x, y)[3], 255);
        }
    }
}

#[test]
fn object_removal_mask_must_match_native_size() {
    let content = gradient(40, 40);
    let inputs = ToolInputs {
        mask: Some(MaskBuffer::new(20, 20).unwrap()),
        ..ToolInputs::with_content(upload(&content))
    };
    let err = TransformEngine::default()
        .process(ToolKind::ObjectRemoval, &inputs)
        .unwrap_err();
    assert!(matches!(err, LuminaError::DimensionMismatch { .. }));
}

#[test]
fn smoothing_never_touches_the_border() {
    let content = gradient(10, 10);
    let mask = MaskBuffer::from_raster(RasterBuffer::filled(10, 10, [255, 0, 0, 255]).unwrap());
    let mut partial = mask.clone();
    for i in 0..10 {
        partial.set_coverage(i, 5, 0);
    }
    let params = InpaintParams {
        radius: 1,
        mask_threshold: 0,
    };
    for m in [&mask, &partial] {
        let out = smooth_masked(&content, m, &params, Execution::Parallel).unwrap();
        for i in 0..10 {
            assert_eq!(out.pixel(0, i), content.pixel(0, i));
            assert_eq!(out.pixel(9, i), content.pixel(9, i));
            assert_eq!(out.pixel(i, 0), content.pixel(i, 0));
            assert_eq!(out.pixel(i, 9), content.pixel(i, 9));
        }
    }
}

#[test]
fn fully_surrounded_masked_pixel_keeps_color() {
    let content = gradient(9, 9);
    let mut mask = MaskBuffer::new(9, 9).unwrap();
    for y in 2..7 {
        for x in 2..7 {
            mask.set_coverage(x, y, 255);
        }
    }
    let params = InpaintParams {
        radius: 1,
        mask_threshold: 0,
    };
    let out = smooth_masked(&content, &mask, &params, Execution::Sequential).unwrap();
    assert_eq!(out.pixel(4, 4), content.pixel(4, 4));
    assert_ne!(out.pixel(2, 2), content.pixel(2, 2));
}

// ── Scene transform ────────────────────────────────────────────

#[test]
fn scene_transform_priority_and_filename() {
    let content = RasterBuffer::filled(3, 3, [100, 150, 200, 255]).unwrap();
    let inputs = ToolInputs {
        prompt: Some("A Dark Winter Night".into()),
        ..ToolInputs::with_content(upload(&content))
    };
    let out = sequential_engine()
        .process(ToolKind::SceneTransform, &inputs)
        .unwrap();
    assert_eq!(out.filename, "scene-transformed.png");
    assert_eq!(out.resource.decode().unwrap().pixel(1, 1), [40, 60, 120, 255]);

    let graded =
        lumina_color::apply_color_grade(&content, "a dark winter night", Execution::Parallel);
    assert_eq!(graded.applied, Some(GradeKind::Night));
}

#[test]
fn scene_transform_sepia_exact() {
    let content = RasterBuffer::filled(1, 1, [100, 150, 200, 255]).unwrap();
    let out = sequential_engine()
        .run(&TransformRequest::color_grade("vintage look"), &content)
        .unwrap();
    assert_eq!(out.pixel(0, 0), [192, 171, 133, 255]);
}

#[test]
fn scene_transform_without_prompt_fails() {
    let content = RasterBuffer::new(2, 2).unwrap();
    let err = TransformEngine::default()
        .process(ToolKind::SceneTransform, &ToolInputs::with_content(upload(&content)))
        .unwrap_err();
    assert!(matches!(err, LuminaError::InvalidParameter(_)));
}

// ── Style transfer ─────────────────────────────────────────────

#[test]
fn style_transfer_strength_bounds() {
    let content = RasterBuffer::filled(4, 4, [100, 100, 100, 255]).unwrap();
    let style = RasterBuffer::filled(2, 3, [50, 50, 50, 255]).unwrap();
    let engine = TransformEngine::default();
    let run = |strength: f32| {
        let inputs = ToolInputs {
            style: Some(upload(&style)),
            strength: Some(strength),
            ..ToolInputs::with_content(upload(&content))
        };
        engine
            .process(ToolKind::StyleTransfer, &inputs)
            .unwrap()
            .resource
            .decode()
            .unwrap()
    };

    assert_eq!(run(0.0), content);
    let full = run(1.0);
    assert_eq!(full.pixel(2, 2), [120, 120, 120, 255]);
    assert_ne!(full.pixel(2, 2), style.pixel(0, 0));
}

#[test]
fn style_transfer_uses_configured_strength() {
    let content = RasterBuffer::filled(2, 2, [100, 100, 100, 255]).unwrap();
    let style = RasterBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
    let inputs = ToolInputs {
        style: Some(upload(&style)),
        ..ToolInputs::with_content(upload(&content))
    };
    let out = TransformEngine::default()
        .process(ToolKind::StyleTransfer, &inputs)
        .unwrap();
    assert_eq!(out.filename, "style-transfer-result.png");
    // Default strength 0.7: 100 * (1 - 0.21) = 79
    assert_eq!(out.resource.decode().unwrap().pixel(0, 0), [79, 79, 79, 255]);
}

// ── Download ───────────────────────────────────────────────────

#[test]
fn results_save_under_default_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let content = gradient(8, 8);
    let out = TransformEngine::default()
        .process(ToolKind::BackgroundRemoval, &ToolInputs::with_content(upload(&content)))
        .unwrap();
    let path = out.save_to(dir.path()).unwrap();
    assert!(path.ends_with("background-removed.png"));

    let saved = ImageResource::new("image/png", std::fs::read(&path).unwrap());
    assert_eq!(saved.decode().unwrap(), out.resource.decode().unwrap());
}

// ── Parallel parity ────────────────────────────────────────────

#[test]
fn parallel_and_sequential_engines_agree() {
    let content = gradient(33, 17);
    let style = RasterBuffer::test_pattern(7, 5).unwrap();
    let mut mask = MaskBuffer::for_content(&content).unwrap();
    mask.paint_dab(16.0, 8.0, 5.0, 200).unwrap();

    let parallel = TransformEngine::default();
    let sequential = sequential_engine();
    let requests = [
        TransformRequest::background_remove(Default::default()),
        TransformRequest::inpaint(mask, InpaintParams::default()),
        TransformRequest::color_grade("sunset"),
        TransformRequest::style_blend(style, 0.6),
    ];
    for request in &requests {
        assert_eq!(
            parallel.run(request, &content).unwrap(),
            sequential.run(request, &content).unwrap(),
            "{:?}",
            request.operation()
        );
    }
}
