pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Hard 75 Challenge</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #111827;
      --bg-2: #1e3a8a;
      --bg-3: #581c87;
      --panel: #1f2937;
      --panel-2: #374151;
      --ink: #f9fafb;
      --muted: #9ca3af;
      --accent: #3b82f6;
      --good: #22c55e;
      --warn: #eab308;
      --bad: #ef4444;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 55%, var(--bg-3));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 24px 16px 48px;
    }

    .shell {
      max-width: 920px;
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    header .day-line {
      color: #93c5fd;
      font-size: 1.3rem;
      font-weight: 600;
    }

    header .sub-line {
      color: var(--muted);
      margin-top: 4px;
    }

    .card {
      background: var(--panel);
      border-radius: 14px;
      padding: 20px;
      border: 1px solid rgba(255, 255, 255, 0.06);
    }

    .card h2 {
      margin: 0 0 14px;
      font-size: 1.2rem;
    }

    .signin {
      max-width: 420px;
      margin: 10vh auto 0;
      text-align: center;
    }

    .signin input {
      width: 100%;
      background: var(--panel-2);
      border: none;
      border-radius: 8px;
      padding: 10px 12px;
      color: var(--ink);
      font-size: 1rem;
      margin: 12px 0;
    }

    .signin p {
      color: var(--muted);
      font-size: 0.9rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent);
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    button:disabled {
      background: var(--panel-2);
      color: var(--muted);
      cursor: not-allowed;
    }

    .topbar {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .topbar .who {
      color: var(--muted);
      font-size: 0.85rem;
      word-break: break-all;
    }

    .btn-quiet {
      background: var(--panel-2);
    }

    .btn-danger {
      background: var(--bad);
    }

    .progress-track {
      background: var(--panel-2);
      border-radius: 999px;
      height: 12px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--good), var(--accent));
      transition: width 250ms ease;
    }

    .progress-label {
      display: flex;
      justify-content: space-between;
      color: var(--muted);
      font-size: 0.85rem;
      margin-bottom: 6px;
    }

    .tasks {
      display: grid;
      gap: 8px;
    }

    .task {
      display: flex;
      align-items: center;
      gap: 12px;
      background: var(--panel-2);
      border-radius: 10px;
      padding: 10px 14px;
      cursor: pointer;
    }

    .task .box {
      width: 22px;
      height: 22px;
      border-radius: 50%;
      border: 2px solid var(--muted);
      flex-shrink: 0;
    }

    .task.done .box {
      border-color: var(--good);
      background: var(--good);
    }

    .task.done .label {
      text-decoration: line-through;
      color: var(--muted);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .metric input {
      width: 100%;
      background: var(--panel-2);
      border: none;
      border-radius: 8px;
      padding: 10px 12px;
      color: var(--ink);
      font-size: 1rem;
    }

    .metric .unit {
      color: var(--muted);
      font-size: 0.85rem;
      margin-top: 4px;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .stat {
      background: var(--panel-2);
      border-radius: 10px;
      padding: 14px;
      text-align: center;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.8rem;
      margin-top: 2px;
    }

    .streak .value {
      color: var(--warn);
    }

    .achievements {
      display: grid;
      gap: 6px;
      font-size: 0.95rem;
    }

    .achievements .locked {
      color: var(--muted);
    }

    .achievements .unlocked::before {
      content: "\2713 ";
      color: var(--good);
    }

    .grid75 {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(34px, 1fr));
      gap: 6px;
    }

    .cell {
      height: 32px;
      border-radius: 6px;
      display: grid;
      place-items: center;
      font-size: 0.75rem;
      font-weight: 600;
      background: var(--panel-2);
      color: var(--muted);
    }

    .cell.completed { background: var(--good); color: #052e16; }
    .cell.today { background: var(--warn); color: #1c1917; }
    .cell.missed { background: var(--bad); color: #fff1f2; }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      color: var(--muted);
      font-size: 0.8rem;
      margin-top: 10px;
    }

    .legend .chip {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 4px;
      vertical-align: -1px;
    }

    .actions-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      justify-content: center;
    }

    .complete-btn {
      font-size: 1.05rem;
      padding: 14px 28px;
      background: linear-gradient(90deg, var(--good), var(--accent));
    }

    .journal ol {
      margin: 0;
      padding-left: 20px;
      color: #d1d5db;
      display: grid;
      gap: 6px;
      font-size: 0.95rem;
    }

    .journal .tabs {
      display: flex;
      gap: 8px;
      margin-bottom: 12px;
    }

    .journal .tabs button.active {
      background: var(--warn);
      color: #1c1917;
    }

    .status {
      min-height: 1.3em;
      text-align: center;
      font-size: 0.95rem;
      color: var(--muted);
    }

    .status[data-type="error"] { color: var(--bad); }
    .status[data-type="ok"] { color: var(--good); }

    #tracker {
      display: grid;
      gap: 20px;
    }

    .hidden { display: none !important; }
  </style>
</head>
<body>
  <div class="shell">
    <section id="signin" class="card signin">
      <h1>Hard 75 Challenge</h1>
      <p>Track your 75-day transformation journey.</p>
      <input id="signin-user" type="text" placeholder="Your user id" autocomplete="username" />
      <button id="signin-btn" type="button">Continue</button>
      <p>Your identity comes from your sign-in provider; paste the id it gave you.</p>
      <div class="status" id="signin-status"></div>
    </section>

    <div id="tracker" class="hidden">
      <header class="card">
        <div class="topbar">
          <div>
            <h1>Hard 75 Challenge</h1>
            <div class="day-line">Day <span id="current-day">1</span> of 75</div>
            <div class="sub-line">
              <span id="completed-count">0</span> days completed &bull;
              <span id="completion-pct">0</span>% today
            </div>
          </div>
          <div style="text-align: right;">
            <div class="who" id="who"></div>
            <button class="btn-quiet" id="signout-btn" type="button">Sign out</button>
          </div>
        </div>
      </header>

      <section class="card">
        <div class="progress-label">
          <span>Challenge progress</span>
          <span><span id="challenge-count">0</span>/75 days</span>
        </div>
        <div class="progress-track"><div class="progress-fill" id="challenge-fill" style="width: 0%"></div></div>
        <div class="progress-label" style="margin-top: 14px;">
          <span>Today</span>
          <span><span id="today-pct">0</span>%</span>
        </div>
        <div class="progress-track"><div class="progress-fill" id="today-fill" style="width: 0%"></div></div>
      </section>

      <section class="card">
        <h2>Daily Non-Negotiables</h2>
        <div class="tasks" id="tasks"></div>
      </section>

      <section class="card">
        <h2>Today's Metrics</h2>
        <div class="metrics">
          <div class="metric">
            <label for="water-input">Water intake</label>
            <input id="water-input" type="number" step="0.1" min="0" placeholder="Liters" />
            <div class="unit">liters</div>
          </div>
          <div class="metric">
            <label for="steps-input">Steps</label>
            <input id="steps-input" type="number" min="0" placeholder="Steps" />
            <div class="unit">steps</div>
          </div>
        </div>
      </section>

      <section class="card">
        <h2>Challenge Overview</h2>
        <div class="stat-grid">
          <div class="stat"><div class="value" id="stat-water">0.0L</div><div class="label">Total water</div></div>
          <div class="stat"><div class="value" id="stat-steps">0</div><div class="label">Total steps</div></div>
          <div class="stat"><div class="value" id="stat-tasks">0</div><div class="label">Tasks completed</div></div>
          <div class="stat"><div class="value" id="stat-avg-water">0.0L</div><div class="label">Avg water / day</div></div>
          <div class="stat"><div class="value" id="stat-avg-steps">0</div><div class="label">Avg steps / day</div></div>
          <div class="stat streak"><div class="value" id="stat-streak">0</div><div class="label">Current streak</div></div>
        </div>
        <h2 style="margin-top: 18px;">Achievements</h2>
        <div class="achievements" id="achievements"></div>
        <h2 style="margin-top: 18px;">Challenge Days</h2>
        <div class="grid75" id="day-grid"></div>
        <div class="legend">
          <span><span class="chip" style="background: var(--good)"></span>Completed</span>
          <span><span class="chip" style="background: var(--warn)"></span>Today</span>
          <span><span class="chip" style="background: var(--bad)"></span>Missed</span>
          <span><span class="chip" style="background: var(--panel-2)"></span>Future</span>
        </div>
      </section>

      <section class="card journal">
        <h2>Journal Prompts</h2>
        <div class="tabs">
          <button id="journal-morning" class="active" type="button">Morning</button>
          <button id="journal-evening" type="button">Evening</button>
        </div>
        <ol id="journal-list"></ol>
      </section>

      <section class="actions-row">
        <button class="complete-btn" id="complete-btn" type="button" disabled>Complete All Tasks First</button>
        <button class="btn-quiet" id="reset-day-btn" type="button">Reset Daily Progress</button>
        <button class="btn-danger" id="reset-challenge-btn" type="button">Reset Entire Challenge</button>
      </section>

      <div class="status" id="status"></div>
    </div>
  </div>

  <script>
    const TASKS = [
      { key: 'wakeUp4am', label: '4 AM Wake Up' },
      { key: 'morningJournal', label: '5-Prompt Journal (Morning)' },
      { key: 'exercise5am', label: 'Exercise 5 AM' },
      { key: 'water1L', label: '1L Water before 6 AM' },
      { key: 'noCoffeePhone', label: 'No Coffee + No Phone 90 mins' },
      { key: 'threeMeals', label: '3 Meals a Day' },
      { key: 'water2to3L', label: '2-3L of Water a Day' },
      { key: 'walk8k', label: 'Walk 8k Steps a Day' },
      { key: 'eveningJournal', label: '5-Prompt Journal (Evening)' },
      { key: 'noPhoneAfter8', label: 'No Phones After 8 PM' }
    ];

    const MORNING_PROMPTS = [
      "What are 3 things I'm grateful for today?",
      'What is my main focus/priority for today?',
      'What challenges might I face today and how will I overcome them?',
      'How do I want to feel at the end of today?',
      'What is one small win I can achieve today?'
    ];

    const EVENING_PROMPTS = [
      'What went well today?',
      'What could I have done better?',
      'What did I learn about myself today?',
      'How did I grow today?',
      'What am I most proud of from today?'
    ];

    const signinEl = document.getElementById('signin');
    const trackerEl = document.getElementById('tracker');
    const statusEl = document.getElementById('status');
    const tasksEl = document.getElementById('tasks');
    const gridEl = document.getElementById('day-grid');
    const achievementsEl = document.getElementById('achievements');
    const waterInput = document.getElementById('water-input');
    const stepsInput = document.getElementById('steps-input');
    const completeBtn = document.getElementById('complete-btn');
    const journalList = document.getElementById('journal-list');

    let userId = localStorage.getItem('hard75UserId') || '';
    let journalMode = 'morning';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 3000);
      }
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        ...options,
        headers: {
          'content-type': 'application/json',
          'x-user-id': userId,
          ...(options.headers || {})
        }
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const renderLedger = (data) => {
      document.getElementById('current-day').textContent = data.current_day;
      document.getElementById('completed-count').textContent = data.completed_count;
      document.getElementById('completion-pct').textContent = data.completion_percentage;
      document.getElementById('today-pct').textContent = data.completion_percentage;
      document.getElementById('challenge-count').textContent = data.completed_count;
      document.getElementById('challenge-fill').style.width = `${(data.completed_count / 75) * 100}%`;
      document.getElementById('today-fill').style.width = `${data.completion_percentage}%`;

      tasksEl.innerHTML = '';
      for (const task of TASKS) {
        const done = data.today.taskSet[task.key];
        const row = document.createElement('div');
        row.className = done ? 'task done' : 'task';
        row.innerHTML = `<span class="box"></span><span class="label">${task.label}</span>`;
        row.addEventListener('click', () => toggleTask(task.key));
        tasksEl.appendChild(row);
      }

      if (document.activeElement !== waterInput) {
        waterInput.value = data.today.waterLiters === 0 ? '' : data.today.waterLiters;
      }
      if (document.activeElement !== stepsInput) {
        stepsInput.value = data.today.steps === 0 ? '' : data.today.steps;
      }

      completeBtn.disabled = !data.day_complete;
      completeBtn.textContent = data.day_complete
        ? `Complete Day ${data.current_day}`
        : 'Complete All Tasks First';
    };

    const renderStats = (data) => {
      document.getElementById('stat-water').textContent = `${data.totals.total_water.toFixed(1)}L`;
      document.getElementById('stat-steps').textContent = data.totals.total_steps.toLocaleString();
      document.getElementById('stat-tasks').textContent = data.totals.total_tasks_completed;
      document.getElementById('stat-avg-water').textContent = `${data.totals.avg_water_per_day.toFixed(1)}L`;
      document.getElementById('stat-avg-steps').textContent = data.totals.avg_steps_per_day.toLocaleString();
      document.getElementById('stat-streak').textContent = data.current_streak;

      achievementsEl.innerHTML = '';
      const names = ['First Week Warrior', 'Habit Builder', 'Marathon Mindset', 'Hard 75 Champion'];
      if (data.achievements.length === 0) {
        const hint = document.createElement('div');
        hint.className = 'locked';
        hint.textContent = 'Complete 7 days for your first achievement!';
        achievementsEl.appendChild(hint);
      }
      for (const name of names) {
        if (data.achievements.includes(name)) {
          const row = document.createElement('div');
          row.className = 'unlocked';
          row.textContent = name;
          achievementsEl.appendChild(row);
        }
      }

      gridEl.innerHTML = '';
      data.day_grid.forEach((state, index) => {
        const cell = document.createElement('div');
        cell.className = `cell ${state}`;
        cell.textContent = index + 1;
        cell.title = `Day ${index + 1}: ${state}`;
        gridEl.appendChild(cell);
      });
    };

    const refresh = async () => {
      const [ledger, stats] = await Promise.all([api('/api/ledger'), api('/api/stats')]);
      renderLedger(ledger);
      renderStats(stats);
    };

    const toggleTask = async (key) => {
      try {
        renderLedger(await api('/api/tasks/toggle', { method: 'POST', body: JSON.stringify({ key }) }));
        api('/api/stats').then(renderStats).catch(() => {});
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const sendMetric = (path) => async (event) => {
      try {
        renderLedger(await api(path, { method: 'POST', body: JSON.stringify({ value: event.target.value }) }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const completeDay = async () => {
      try {
        const result = await api('/api/day/complete', { method: 'POST' });
        setStatus(
          result.finished
            ? `Day ${result.completed_day} completed. Challenge finished!`
            : `Day ${result.completed_day} completed! Moving to Day ${result.current_day}.`,
          'ok'
        );
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const resetDay = async () => {
      try {
        renderLedger(await api('/api/day/reset', { method: 'POST' }));
        setStatus('Daily progress reset!', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const resetChallenge = async () => {
      if (!window.confirm('Are you sure you want to reset the entire challenge? This will delete all your progress!')) {
        return;
      }
      try {
        renderLedger(await api('/api/challenge/reset', { method: 'POST' }));
        await refresh();
        setStatus('Challenge reset.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const renderJournal = () => {
      const prompts = journalMode === 'morning' ? MORNING_PROMPTS : EVENING_PROMPTS;
      journalList.innerHTML = '';
      for (const prompt of prompts) {
        const item = document.createElement('li');
        item.textContent = prompt;
        journalList.appendChild(item);
      }
      document.getElementById('journal-morning').classList.toggle('active', journalMode === 'morning');
      document.getElementById('journal-evening').classList.toggle('active', journalMode === 'evening');
    };

    const enterTracker = async () => {
      signinEl.classList.add('hidden');
      trackerEl.classList.remove('hidden');
      document.getElementById('who').textContent = userId;
      renderJournal();
      try {
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('signin-btn').addEventListener('click', () => {
      const id = document.getElementById('signin-user').value.trim();
      if (!id) {
        const el = document.getElementById('signin-status');
        el.textContent = 'Enter a user id to continue.';
        el.dataset.type = 'error';
        return;
      }
      userId = id;
      localStorage.setItem('hard75UserId', userId);
      enterTracker();
    });

    document.getElementById('signout-btn').addEventListener('click', () => {
      localStorage.removeItem('hard75UserId');
      window.location.reload();
    });

    waterInput.addEventListener('input', sendMetric('/api/metrics/water'));
    stepsInput.addEventListener('input', sendMetric('/api/metrics/steps'));
    completeBtn.addEventListener('click', completeDay);
    document.getElementById('reset-day-btn').addEventListener('click', resetDay);
    document.getElementById('reset-challenge-btn').addEventListener('click', resetChallenge);
    document.getElementById('journal-morning').addEventListener('click', () => { journalMode = 'morning'; renderJournal(); });
    document.getElementById('journal-evening').addEventListener('click', () => { journalMode = 'evening'; renderJournal(); });

    if (userId) {
      document.getElementById('signin-user').value = userId;
      enterTracker();
    }
  </script>
</body>
</html>
"#;
