pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Aviation Checklist Validator</title>
  <style>
    body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
    textarea { width: 100%; height: 12rem; font-family: monospace; }
    #result { white-space: pre-wrap; border-left: 4px solid #ccc; padding: .5rem 1rem; }
    .error { color: #a00; }
  </style>
</head>
<body>
  <h1>✈️ Aviation Pre-Flight Checklist Validator</h1>
  <p>Validate your pre-flight checklist against FAA/ICAO standards using AI.</p>

  <input type="file" id="file" accept=".txt,.json">
  <p id="hint">Upload a <code>.txt</code> or <code>.json</code> checklist to begin analysis.</p>

  <label for="preview">Checklist Preview</label>
  <textarea id="preview" readonly></textarea>

  <p><button id="validate" disabled>Validate Checklist</button> <span id="spinner" hidden>Analyzing checklist for compliance...</span></p>

  <div id="result"></div>

  <script>
    const file = document.getElementById("file");
    const preview = document.getElementById("preview");
    const button = document.getElementById("validate");
    const spinner = document.getElementById("spinner");
    const result = document.getElementById("result");

    function show(text, isError) {
      result.textContent = text;
      result.className = isError ? "error" : "";
    }

    file.addEventListener("change", async () => {
      button.disabled = true;
      preview.value = "";
      show("", false);
      if (!file.files.length) return;

      const form = new FormData();
      form.append("file", file.files[0]);
      const response = await fetch("/api/preview", { method: "POST", body: form });
      const body = await response.json();
      if (!response.ok) return show(body.error, true);

      preview.value = body.checklist_text;
      button.disabled = false;
    });

    button.addEventListener("click", async () => {
      button.disabled = true;
      spinner.hidden = false;
      try {
        const response = await fetch("/api/validate", {
          method: "POST",
          headers: { "content-type": "application/json" },
          body: JSON.stringify({ checklist_text: preview.value }),
        });
        const body = await response.json();
        response.ok ? show(body.summary, false) : show(body.error, true);
      } catch (e) {
        show("⚠️ Error: " + e, true);
      } finally {
        spinner.hidden = true;
        button.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;
