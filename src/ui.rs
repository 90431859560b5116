pub fn render_index(date_display: &str, date_iso: &str) -> String {
    INDEX_HTML
        .replace("{{DATE_DISPLAY}}", date_display)
        .replace("{{DATE}}", date_iso)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Task Board</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    #progress-bar {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #ff9a6b);
      transition: width 300ms ease;
    }

    #progress-text {
      font-weight: 600;
      color: var(--accent-2);
    }

    #completion-message {
      display: none;
      color: var(--ok);
      font-weight: 600;
    }

    .goal-row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    input[type="number"],
    input[type="text"],
    input[type="date"] {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    #goal-input {
      width: 90px;
    }

    #goal-description {
      flex: 1;
      min-width: 180px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-muted {
      background: var(--accent-2);
      color: white;
    }

    .panels {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    li {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 8px 10px;
      border-radius: 12px;
      background: rgba(47, 72, 88, 0.05);
    }

    li span {
      flex: 1;
      overflow-wrap: anywhere;
    }

    li button {
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .item-complete {
      background: var(--ok);
      color: white;
    }

    .item-delete {
      background: rgba(47, 72, 88, 0.12);
      color: var(--accent-2);
    }

    .add-row {
      display: flex;
      gap: 8px;
    }

    .add-row input {
      flex: 1;
    }

    .records-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Task Board</h1>
      <p id="date" class="subtitle">{{DATE_DISPLAY}}</p>
    </header>

    <section class="card" id="progress-card">
      <h2>Progress</h2>
      <div class="progress-track"><div id="progress-bar"></div></div>
      <span id="progress-text"></span>
      <span id="completion-message">Goal reached — nice work!</span>
      <div class="goal-row">
        <input id="goal-input" type="number" min="1" aria-label="Goal target" />
        <input id="goal-description" type="text" aria-label="Goal description" />
        <button id="set-goal" class="btn-muted" type="button">Set goal</button>
      </div>
    </section>

    <section class="panels" id="task-panels">
      <div class="card task-panel">
        <h2><strong>Daily Chores</strong></h2>
        <ul></ul>
        <div class="add-row">
          <input type="text" placeholder="New task" aria-label="New task" />
          <button class="btn-primary" type="button">Add</button>
        </div>
      </div>
      <div class="card task-panel">
        <h2><strong>Deep Work</strong></h2>
        <ul></ul>
        <div class="add-row">
          <input type="text" placeholder="New task" aria-label="New task" />
          <button class="btn-primary" type="button">Add</button>
        </div>
      </div>
      <div class="card task-panel">
        <h2><strong>Errands</strong></h2>
        <ul></ul>
        <div class="add-row">
          <input type="text" placeholder="New task" aria-label="New task" />
          <button class="btn-primary" type="button">Add</button>
        </div>
      </div>
    </section>

    <section class="card" id="today-records">
      <div class="records-head">
        <h2>Completed</h2>
        <input id="today-date" type="date" value="{{DATE}}" max="{{DATE}}" aria-label="Records date" />
      </div>
      <ul></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const progressBar = document.getElementById('progress-bar');
    const progressText = document.getElementById('progress-text');
    const completionMessage = document.getElementById('completion-message');
    const goalInput = document.getElementById('goal-input');
    const goalDescription = document.getElementById('goal-description');
    const setGoalButton = document.getElementById('set-goal');
    const recordsList = document.querySelector('#today-records ul');
    const recordsDate = document.getElementById('today-date');
    const statusEl = document.getElementById('status');

    let currentGoal = { target: 3, description: 'task completion progress' };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const message = await res.text();
        const err = new Error(message || 'Request failed');
        err.status = res.status;
        throw err;
      }
      return res.json();
    };

    const post = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const applyProgress = (progress) => {
      progressBar.style.width = progress.percentage + '%';
      progressText.textContent = progress.label;
      completionMessage.style.display = progress.goal_reached ? 'block' : 'none';
    };

    const refreshProgress = () =>
      api('/api/progress').then(applyProgress).catch((err) => setStatus(err.message, 'error'));

    // Completed records panel.
    const renderRecordItem = (text) => {
      const item = document.createElement('li');
      const span = document.createElement('span');
      const deleteBtn = document.createElement('button');

      span.textContent = text;
      deleteBtn.textContent = 'Delete';
      deleteBtn.className = 'item-delete';

      item.appendChild(span);
      item.appendChild(deleteBtn);
      recordsList.appendChild(item);

      deleteBtn.addEventListener('click', () => {
        post('/api/records/remove', { date: recordsDate.value, text })
          .then((data) => {
            renderRecords(data.records);
            applyProgress(data.progress);
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    };

    const renderRecords = (items) => {
      recordsList.innerHTML = '';
      items.forEach(renderRecordItem);
    };

    const loadRecords = (date) =>
      api('/api/records?date=' + encodeURIComponent(date))
        .then((data) => renderRecords(data.records))
        .catch((err) => setStatus(err.message, 'error'));

    recordsDate.addEventListener('change', () => loadRecords(recordsDate.value));

    // Task panels. Each panel's heading drives its category; position is the
    // fallback for headless panels.
    const setupPanel = (panel, position) => {
      const list = panel.querySelector('ul');
      const input = panel.querySelector('input');
      const button = panel.querySelector('.add-row button');
      if (!list || !input || !button) return;

      const titleEl = panel.querySelector('h2 strong');
      const category = titleEl ? titleEl.textContent.trim() : '';
      const query =
        'category=' + encodeURIComponent(category) + '&position=' + position;

      const renderTask = (text) => {
        const item = document.createElement('li');
        const span = document.createElement('span');
        const completeBtn = document.createElement('button');
        const deleteBtn = document.createElement('button');

        span.textContent = text;
        completeBtn.textContent = 'Done';
        completeBtn.className = 'item-complete';
        deleteBtn.textContent = 'Delete';
        deleteBtn.className = 'item-delete';

        item.appendChild(span);
        item.appendChild(completeBtn);
        item.appendChild(deleteBtn);
        list.appendChild(item);

        deleteBtn.addEventListener('click', () => {
          post('/api/tasks/remove', { category, position, text })
            .then((data) => renderTasks(data.tasks))
            .catch((err) => setStatus(err.message, 'error'));
        });

        completeBtn.addEventListener('click', () => {
          post('/api/tasks/complete', { category, position, text })
            .then((data) => {
              renderTasks(data.tasks);
              recordsDate.value = data.date;
              renderRecords(data.records);
              applyProgress(data.progress);
            })
            .catch((err) => setStatus(err.message, 'error'));
        });
      };

      const renderTasks = (items) => {
        list.innerHTML = '';
        items.forEach(renderTask);
      };

      const addTask = () => {
        const text = input.value.trim();
        if (!text) return;
        post('/api/tasks', { category, position, text })
          .then((data) => {
            input.value = '';
            renderTasks(data.tasks);
          })
          .catch((err) => setStatus(err.message, 'error'));
      };

      button.addEventListener('click', (event) => {
        event.preventDefault();
        addTask();
      });

      input.addEventListener('keypress', (event) => {
        if (event.key === 'Enter') {
          event.preventDefault();
          addTask();
        }
      });

      api('/api/tasks?' + query)
        .then((data) => renderTasks(data.tasks))
        .catch((err) => setStatus(err.message, 'error'));
    };

    document
      .querySelectorAll('#task-panels .task-panel')
      .forEach((panel, index) => setupPanel(panel, index));

    // Goal controls.
    const fillGoalInputs = () => {
      goalInput.value = currentGoal.target;
      goalDescription.value = currentGoal.description;
    };

    setGoalButton.addEventListener('click', () => {
      post('/api/goal', {
        target: goalInput.value,
        description: goalDescription.value
      })
        .then((data) => {
          currentGoal = { target: data.target, description: data.description };
          fillGoalInputs();
          applyProgress(data.progress);
        })
        .catch((err) => {
          if (err.status === 400) {
            alert('The goal target must be at least 1.');
            fillGoalInputs();
          } else {
            setStatus(err.message, 'error');
          }
        });
    });

    api('/api/goal')
      .then((data) => {
        currentGoal = { target: data.target, description: data.description };
        fillGoalInputs();
        applyProgress(data.progress);
      })
      .catch((err) => setStatus(err.message, 'error'));

    loadRecords(recordsDate.value);
    refreshProgress();
  </script>
</body>
</html>
"#;
