/// The single page the browser loads. Its handlers call the `/ui/*` endpoints
/// and swap the returned fragments into place.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Job Application Assistant</title>
  <style>
    #dashboard { display: flex; gap: 1rem; }
    .column { flex: 1; min-height: 8rem; border: 1px solid #ccc; padding: 0.5rem; }
    .app-card { border: 1px solid #888; margin: 0.5rem 0; padding: 0.5rem; cursor: move; }
  </style>
</head>
<body>
  <section>
    <h2>Resume Analysis</h2>
    <textarea id="resume" placeholder="Paste your resume"></textarea>
    <textarea id="jd" placeholder="Paste the job description"></textarea>
    <button onclick="analyze()">Analyze</button>
    <div id="result"></div>
  </section>

  <section>
    <h2>Upload Resume</h2>
    <input type="file" id="resumeFile" accept=".pdf" />
    <button onclick="uploadResume()">Upload</button>
    <div id="uploadResult"></div>
  </section>

  <section>
    <h2>Profile</h2>
    <input id="profileName" placeholder="Full name" />
    <input id="profileEmail" placeholder="Email" />
    <input id="profilePhone" placeholder="Phone" />
    <button onclick="loadProfile()">Look up</button>
    <button onclick="createProfile()">Create</button>
    <div id="profileResult"></div>
  </section>

  <section>
    <h2>Applications</h2>
    <div id="dashboard"></div>
  </section>

  <script>
    async function swap(targetId, request) {
      const target = document.getElementById(targetId);
      try {
        const res = await request;
        // 204: nothing changed server-side, keep the current markup.
        if (res.status === 204) return;
        target.innerHTML = await res.text();
      } catch (err) {
        console.error("Request failed:", err);
      }
    }

    function form(fields) {
      const body = new URLSearchParams();
      for (const [k, v] of Object.entries(fields)) body.append(k, v);
      return { method: "POST", body };
    }

    function analyze() {
      swap("result", fetch("/ui/analyze", form({
        resume: document.getElementById("resume").value,
        jd: document.getElementById("jd").value,
      })));
    }

    function uploadResume() {
      const body = new FormData();
      const file = document.getElementById("resumeFile").files[0];
      if (file) body.append("file", file);
      swap("uploadResult", fetch("/ui/upload", { method: "POST", body }));
    }

    function loadProfile() {
      const email = document.getElementById("profileEmail").value;
      swap("profileResult", fetch("/ui/profile?email=" + encodeURIComponent(email)));
    }

    function createProfile() {
      swap("profileResult", fetch("/ui/profile", form({
        full_name: document.getElementById("profileName").value,
        email: document.getElementById("profileEmail").value,
        phone: document.getElementById("profilePhone").value,
      })));
    }

    function loadDashboard() {
      swap("dashboard", fetch("/ui/dashboard"));
    }

    function updateStatus(id, status) {
      swap("dashboard", fetch("/ui/dashboard/status", form({ id, status })));
    }

    let pendingDrag = Promise.resolve();

    function handleDragStart(event, id) {
      event.dataTransfer.effectAllowed = "move";
      pendingDrag = fetch("/ui/dashboard/drag/" + id, { method: "POST" });
    }

    async function handleDrop(event, status) {
      event.preventDefault();
      await pendingDrag;
      swap("dashboard", fetch("/ui/dashboard/drop/" + encodeURIComponent(status), { method: "POST" }));
    }

    window.onload = loadDashboard;
  </script>
</body>
</html>
"##;
