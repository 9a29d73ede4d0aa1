//! Usage: Flow delegate that opens the consent URL in the system browser.

use std::future::Future;
use std::pin::Pin;

use tauri_plugin_opener::OpenerExt;
use yup_oauth2::authenticator_delegate::InstalledFlowDelegate;

pub(crate) struct OpenInBrowser<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> OpenInBrowser<R> {
    pub(crate) fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: tauri::Runtime> InstalledFlowDelegate for OpenInBrowser<R> {
    fn present_user_url<'a>(
        &'a self,
        url: &'a str,
        _need_code: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            // The URL itself stays out of the logs; it embeds the client id.
            tracing::info!("opening consent page in the system browser");
            self.app
                .opener()
                .open_url(url, None::<&str>)
                .map_err(|e| format!("failed to open the consent page: {e}"))?;
            Ok(String::new())
        })
    }
}
