use cert_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando el cliente de quiz...");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Cert Quiz",
        options,
        Box::new(|_cc| {
            let mut app = QuizApp::from_env();
            app.cargar_pregunta(None);
            Ok(Box::new(app))
        }),
    )
}
