//! 画面状態
//!
//! タブを閉じるまでの一時的な状態のみ。APIキーを含め何も永続化しない。
//! 状態遷移はここに集約し、コンポーネントはシグナル経由で呼び出すだけにする。

use roti_checker_common::{
    validate_api_key, validate_upload, AnalysisReport, Certificate, Error, UploadedImage,
};

/// アプリケーションの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub api_key: String,
    pub image: Option<UploadedImage>,
    pub report: Option<AnalysisReport>,
    pub loading: bool,
    /// 表示中のエラー（空なら非表示）
    pub error: String,
}

/// 解析に必要な入力一式
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub api_key: String,
    pub image: UploadedImage,
}

impl Session {
    /// APIキー入力（入力のたびにエラーを消す）
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = key;
        self.error.clear();
    }

    /// ファイル読込前のチェック。不合格ならエラーだけを更新する
    pub fn check_upload(&mut self, mime_type: &str, size: u64) -> bool {
        match validate_upload(mime_type, size) {
            Ok(()) => true,
            Err(err) => {
                self.reject_upload(&err);
                false
            }
        }
    }

    /// アップロード失敗。画像・解析結果はそのまま残す
    ///
    /// 検証エラーはそのまま、読込失敗は解析失敗と同じ分類で表示する
    pub fn reject_upload(&mut self, err: &Error) {
        self.error = err.user_message();
    }

    /// 新しい画像で置き換え、前回の結果を破棄する
    pub fn accept_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.error.clear();
        self.report = None;
    }

    /// 解析ボタンを押せるか
    pub fn can_submit(&self) -> bool {
        !self.loading && self.image.is_some() && !self.api_key.is_empty()
    }

    /// 解析開始。入力不備ならエラーを設定し、通信は行わない
    pub fn begin_analysis(&mut self) -> Result<AnalysisJob, Error> {
        let job = validate_api_key(&self.api_key).and_then(|api_key| {
            let image = self.image.clone().ok_or(Error::MissingImage)?;
            Ok(AnalysisJob { api_key, image })
        });

        match job {
            Ok(job) => {
                self.loading = true;
                self.error.clear();
                Ok(job)
            }
            Err(err) => {
                self.error = err.user_message();
                Err(err)
            }
        }
    }

    /// 解析完了。失敗時は前回の結果を残したままエラーを表示する
    pub fn finish_analysis(&mut self, result: Result<AnalysisReport, Error>) {
        self.loading = false;
        match result {
            Ok(report) => self.report = Some(report),
            Err(err) => self.error = err.user_message(),
        }
    }

    /// 印刷用の証明書（結果が無ければNone）
    pub fn certificate(&self, issued_on: String) -> Option<Certificate> {
        let report = self.report.as_ref()?;
        let image = self.image.as_ref().map(|img| img.data_url.clone());
        Some(Certificate::new(report, image, issued_on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roti_checker_common::MAX_IMAGE_BYTES;

    fn image(name: &str) -> UploadedImage {
        UploadedImage::from_base64(name, "image/jpeg", 2048, "/9j/4AAQ").unwrap()
    }

    fn score(session: &Session) -> Option<u8> {
        session.report.as_ref().and_then(|r| r.score)
    }

    fn analysed_session() -> Session {
        let mut session = Session::default();
        session.set_api_key("KEY".into());
        session.accept_image(image("first.jpg"));
        session.begin_analysis().unwrap();
        session.finish_analysis(Ok(AnalysisReport::parse("Score: 6\nAnalysis: ok")));
        session
    }

    #[test]
    fn test_non_image_upload_keeps_analysis() {
        let mut session = analysed_session();
        let before = session.report.clone();

        assert!(!session.check_upload("text/plain", 100));
        assert_eq!(session.error, "Please upload an image file");
        assert_eq!(session.report, before);
        assert_eq!(session.image.as_ref().unwrap().file_name, "first.jpg");
    }

    #[test]
    fn test_oversized_upload_keeps_preview() {
        let mut session = analysed_session();
        let preview = session.image.clone();

        assert!(!session.check_upload("image/png", MAX_IMAGE_BYTES + 1));
        assert_eq!(session.error, "Image size should be less than 4MB");
        assert_eq!(session.image, preview);
    }

    #[test]
    fn test_unreadable_upload_uses_failure_message() {
        let mut session = analysed_session();
        let before = session.report.clone();

        session.reject_upload(&Error::ImageRead("NotReadableError".into()));
        assert_eq!(
            session.error,
            "Error analyzing image. Failed to read image file - NotReadableError"
        );
        assert_eq!(session.report, before);
        assert_eq!(session.image.as_ref().unwrap().file_name, "first.jpg");
    }

    #[test]
    fn test_accept_image_resets_result() {
        let mut session = analysed_session();
        session.error = "old".into();

        session.accept_image(image("second.jpg"));
        assert_eq!(session.image.as_ref().unwrap().file_name, "second.jpg");
        assert!(session.report.is_none());
        assert_eq!(score(&session), None);
        assert!(session.error.is_empty());
    }

    #[test]
    fn test_blank_api_key_blocks_analysis() {
        let mut session = Session::default();
        session.accept_image(image("roti.jpg"));
        session.set_api_key("   ".into());

        let err = session.begin_analysis().unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey));
        assert_eq!(session.error, "Please enter a valid Gemini API key");
        assert!(!session.loading);
    }

    #[test]
    fn test_missing_image_blocks_analysis() {
        let mut session = Session::default();
        session.set_api_key("KEY".into());

        assert!(session.begin_analysis().is_err());
        assert_eq!(session.error, "Please upload an image of your roti");
    }

    #[test]
    fn test_begin_analysis_trims_key_and_sets_loading() {
        let mut session = Session::default();
        session.set_api_key("  KEY \n".into());
        session.accept_image(image("roti.jpg"));

        let job = session.begin_analysis().unwrap();
        assert_eq!(job.api_key, "KEY");
        assert!(session.loading);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_can_submit() {
        let mut session = Session::default();
        assert!(!session.can_submit());
        session.set_api_key("KEY".into());
        assert!(!session.can_submit());
        session.accept_image(image("roti.jpg"));
        assert!(session.can_submit());
    }

    #[test]
    fn test_finish_analysis_score() {
        let session = analysed_session();
        assert_eq!(score(&session), Some(6));
        assert!(!session.loading);
    }

    #[test]
    fn test_finish_analysis_out_of_range_score() {
        let mut session = analysed_session();
        session.begin_analysis().unwrap();
        session.finish_analysis(Ok(AnalysisReport::parse("Score: 0\nAnalysis: flat")));

        assert_eq!(score(&session), None);
        assert!(session.report.is_some());
    }

    #[test]
    fn test_finish_analysis_error_keeps_previous_result() {
        let mut session = analysed_session();
        session.begin_analysis().unwrap();
        session.finish_analysis(Err(Error::Api("[429] quota (RESOURCE_EXHAUSTED)".into())));

        assert!(!session.loading);
        assert_eq!(session.error, "Error analyzing image. API quota exceeded. Please try again later.");
        assert_eq!(score(&session), Some(6));
    }

    #[test]
    fn test_set_api_key_clears_error() {
        let mut session = Session::default();
        session.error = "Please enter a valid Gemini API key".into();
        session.set_api_key("K".into());
        assert!(session.error.is_empty());
    }

    #[test]
    fn test_certificate() {
        let session = analysed_session();
        let cert = session.certificate("June 1, 2026".into()).unwrap();
        assert_eq!(cert.score, Some(6));
        assert!(cert.has_image());

        assert!(Session::default().certificate("x".into()).is_none());
    }
}
