/// Integration tests for the application layer
mod test_utilities;

use io_styles::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn run(request: RunRequest) -> (Result<RunReport>, MockOutputPresenter, MockProgressReporter) {
    let presenter = MockOutputPresenter::new();
    let reporter = MockProgressReporter::new();
    let use_case = RunExamplesUseCase::new(
        FileSystemDirectory::new(),
        presenter.clone(),
        reporter.clone(),
    );
    (use_case.execute(request), presenter, reporter)
}

fn text_payload(style: IoStyle) -> &'static str {
    Payload::for_style(style).as_text().unwrap()
}

#[test]
fn test_end_to_end_from_nonexistent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let request = RunRequest::default().with_output_dir(temp_dir.path().join("example-files"));

    let (result, presenter, _) = run(request.clone());
    let report = result.unwrap();

    assert_eq!(report.directory, DirectoryStatus::Created);
    assert_eq!(
        fs::read(request.file_path(IoStyle::RawBytes)).unwrap(),
        Payload::for_style(IoStyle::RawBytes).to_bytes(TextEncoding::Utf8)
    );
    for style in [IoStyle::BufferedText, IoStyle::ByteStream, IoStyle::Channel] {
        assert_eq!(
            fs::read_to_string(request.file_path(style)).unwrap(),
            text_payload(style)
        );
    }

    let transcript = presenter.transcript();
    assert!(transcript.contains("72, 101, 108, 108, 111, 33"));
    assert!(transcript.contains(text_payload(IoStyle::ByteStream)));
    assert!(transcript.contains(text_payload(IoStyle::Channel)));
}

#[test]
fn test_runs_are_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let (a, _, _) = run(RunRequest::default().with_output_dir(first.path()));
    let (b, _, _) = run(RunRequest::default().with_output_dir(second.path()));

    for style in IoStyle::ALL {
        assert_eq!(
            fs::read(first.path().join(style.file_name())).unwrap(),
            fs::read(second.path().join(style.file_name())).unwrap()
        );
    }
    let read_backs = |r: RunReport| {
        r.outcomes
            .into_iter()
            .map(|o| o.read_back)
            .collect::<Vec<_>>()
    };
    assert_eq!(read_backs(a.unwrap()), read_backs(b.unwrap()));
}

#[test]
fn test_append_styles_accumulate_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let request = RunRequest::default().with_output_dir(temp_dir.path());

    run(request.clone()).0.unwrap();
    let report = run(request.clone()).0.unwrap();

    let stream = report.outcome(IoStyle::ByteStream).unwrap();
    assert_eq!(
        stream.read_back,
        ReadBack::Lines(vec![text_payload(IoStyle::ByteStream).repeat(2)])
    );
    let channel = report.outcome(IoStyle::Channel).unwrap();
    assert_eq!(
        channel.read_back.joined_text().unwrap(),
        text_payload(IoStyle::Channel).repeat(2)
    );
}

#[test]
fn test_latin1_run_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let mut request = RunRequest::default().with_output_dir(temp_dir.path());
    request.encoding = TextEncoding::Latin1;

    let report = run(request.clone()).0.unwrap();

    let channel_text = text_payload(IoStyle::Channel);
    assert_eq!(
        fs::read(request.file_path(IoStyle::Channel)).unwrap().len(),
        channel_text.chars().count()
    );
    assert_eq!(
        report
            .outcome(IoStyle::Channel)
            .unwrap()
            .read_back
            .joined_text()
            .unwrap(),
        channel_text
    );
}

#[test]
fn test_small_chunks_split_multibyte_characters() {
    let temp_dir = TempDir::new().unwrap();
    let mut request = RunRequest::default().with_output_dir(temp_dir.path());
    request.styles = vec![IoStyle::Channel];

    for chunk_size in 1..=12 {
        request.chunk_size = chunk_size;
        request.fresh = true;
        let report = run(request.clone()).0.unwrap();
        let outcome = report.outcome(IoStyle::Channel).unwrap();
        assert_eq!(
            outcome.read_back.joined_text().unwrap(),
            text_payload(IoStyle::Channel),
            "chunk size {}",
            chunk_size
        );
    }
}

#[test]
fn test_channel_progress_reported() {
    let temp_dir = TempDir::new().unwrap();
    let mut request = RunRequest::default().with_output_dir(temp_dir.path());
    request.styles = vec![IoStyle::Channel];

    let (result, _, reporter) = run(request);
    result.unwrap();

    let total = text_payload(IoStyle::Channel).len();
    let expected = format!("Bytes: {}/{} - channel.txt", total, total);
    assert!(reporter.get_messages().contains(&expected));
}

#[test]
fn test_directory_path_taken_by_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocked = temp_dir.path().join("example-files");
    fs::write(&blocked, "occupied").unwrap();

    let (result, presenter, _) = run(RunRequest::default().with_output_dir(&blocked));

    let err = result.unwrap_err();
    let io_err = err.downcast_ref::<IoExampleError>().unwrap();
    assert!(matches!(
        io_err,
        IoExampleError::DirectoryAlreadyExists { .. }
    ));
    assert!(presenter.banners().is_empty());
    assert_eq!(fs::read_to_string(&blocked).unwrap(), "occupied");
}
