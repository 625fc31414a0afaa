//! Integration tests for confgen-core.

use std::{
    collections::HashMap,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use confgen_core::{
    application::ApplicationError,
    error::ErrorCategory,
    prelude::*,
};

/// Template source backed by a map of path -> text.
struct FixedSource(HashMap<PathBuf, String>);

impl FixedSource {
    fn with(path: &str, text: &str) -> Self {
        Self(HashMap::from([(PathBuf::from(path), text.to_owned())]))
    }
}

impl TemplateSource for FixedSource {
    fn read_template(&self, path: &Path) -> ConfgenResult<TemplateText> {
        self.0
            .get(path)
            .map(|text| TemplateText::new(text.as_str()))
            .ok_or_else(|| {
                ApplicationError::template_read(
                    path,
                    &io::Error::new(io::ErrorKind::NotFound, "not found"),
                )
                .into()
            })
    }
}

#[derive(Clone, Default)]
struct SharedSink {
    buf: Arc<Mutex<Vec<u8>>>,
    closed: Arc<Mutex<bool>>,
}

impl Write for SharedSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for SharedSink {
    fn close(self) -> io::Result<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

impl SharedSink {
    fn text(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }
}

const INTGEMM_TEMPLATE: &str = "\
#pragma once
#cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX2
#cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX512BW
#cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX512VNNI
";

#[test]
fn test_full_materialize_workflow() {
    let service = MaterializeService::new(Box::new(FixedSource::with(
        "intgemm_config.h.in",
        INTGEMM_TEMPLATE,
    )));
    let sink = SharedSink::default();

    let report = service
        .materialize(sink.clone(), Path::new("intgemm_config.h.in"))
        .unwrap();

    assert_eq!(report.status_code(), STATUS_SUCCESS);
    assert_eq!(report.replacements, 3);
    assert!(*sink.closed.lock().unwrap());

    let out = sink.text();
    assert_eq!(out.matches("#define").count(), 3);
    assert!(!out.contains("#cmakedefine"));
    assert!(out.starts_with("#pragma once\n"));
    assert_eq!(out.lines().count(), INTGEMM_TEMPLATE.lines().count());
}

#[test]
fn test_output_of_output_is_unchanged() {
    let first = SharedSink::default();
    MaterializeService::new(Box::new(FixedSource::with("a.in", INTGEMM_TEMPLATE)))
        .materialize(first.clone(), Path::new("a.in"))
        .unwrap();

    let second = SharedSink::default();
    let report = MaterializeService::new(Box::new(FixedSource::with("b.in", &first.text())))
        .materialize(second.clone(), Path::new("b.in"))
        .unwrap();

    assert_eq!(report.replacements, 0);
    assert_eq!(first.text(), second.text());
}

#[test]
fn test_missing_template_is_not_found() {
    let service = MaterializeService::new(Box::new(FixedSource::with("a.in", "")));
    let sink = SharedSink::default();

    let err = service
        .materialize(sink.clone(), Path::new("missing.in"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(sink.text().is_empty());
    assert!(!*sink.closed.lock().unwrap());
}

#[test]
fn test_invalid_substitution_is_validation_error() {
    let err: ConfgenError = Substitution::new("", "#define").unwrap_err().into();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!err.suggestions().is_empty());
}
